//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur (noyau::EtatCalc) et les réglages d’affichage
//! (taille de police), et offrir des actions simples sans logique de dessin.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par le moteur (une touche = une transition).
//! - La taille de police n’est PAS un état du moteur.
//! - Garde-fou : taille de police bornée.

use calculatrice::noyau::{EtatCalc, Rendu, Touche};

/// Taille (px) de la ligne courante au démarrage.
pub const TAILLE_POLICE_DEFAUT: f32 = 40.0;

/// Bornes du curseur de taille.
pub const TAILLE_POLICE_MIN: f32 = 16.0;
pub const TAILLE_POLICE_MAX: f32 = 72.0;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- moteur (seul propriétaire de l’état calculatrice) ---
    moteur: EtatCalc,

    // --- paramètres d’affichage ---
    pub taille_police: f32,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            moteur: EtatCalc::new(),
            taille_police: TAILLE_POLICE_DEFAUT,
        }
    }
}

impl AppCalc {
    /// Une action discrète (bouton ou raccourci) => une transition.
    pub fn appuyer(&mut self, touche: Touche) {
        self.moteur.appuyer(touche);
    }

    /// Les deux lignes à afficher.
    pub fn rendu(&self) -> Rendu {
        self.moteur.rendu()
    }

    /// Garde-fou : taille bornée (et NaN => défaut).
    pub fn set_taille_police(&mut self, px: f32) {
        self.taille_police = if px.is_nan() {
            TAILLE_POLICE_DEFAUT
        } else {
            px.clamp(TAILLE_POLICE_MIN, TAILLE_POLICE_MAX)
        };
    }
}
