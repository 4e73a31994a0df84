//! Noyau — évaluation binaire
//!
//! Un seul opérateur est en attente à la fois : pas de précédence, pas de parenthèses.
//! gauche (texte canonique) -> f64, droite -> f64, match sur l’opérateur,
//! contrôle de finitude, arrondi à 10 décimales.

use super::format::{arrondi, lire_nombre};
use super::touche::Operateur;

/// Précision de l’arrondi appliqué au résultat de `=`.
pub const DECIMALES_RESULTAT: usize = 10;

/// Évalue `gauche op droite`.
///
/// Erreurs (message = cause, pour le journal) :
/// - opérande illisible
/// - résultat non fini (division par zéro, dépassement)
pub fn evaluer(gauche: &str, op: Operateur, droite: &str) -> Result<f64, String> {
    let a = lire_operande(gauche)?;
    let b = lire_operande(droite)?;

    let r = op.appliquer(a, b);
    if !r.is_finite() {
        return Err(format!(
            "résultat non fini: {a} {} {b} = {r}",
            op.symbole()
        ));
    }

    Ok(arrondi(r, DECIMALES_RESULTAT))
}

fn lire_operande(s: &str) -> Result<f64, String> {
    lire_nombre(s).ok_or_else(|| format!("opérande invalide: {s:?}"))
}
