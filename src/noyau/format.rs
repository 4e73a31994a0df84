// src/noyau/format.rs
//
// Frontière de formatage
// ----------------------
// Le moteur travaille en forme CANONIQUE (point décimal) et en f64.
// La virgule n’apparaît qu’à l’affichage (vers_affichage).

/// Séparateur décimal affiché.
pub const SEPARATEUR_AFFICHAGE: char = ',';

/// Séparateur décimal canonique (calcul).
pub const SEPARATEUR_CANONIQUE: char = '.';

/// Au-delà (ou en deçà), on bascule en notation exponentielle.
const SEUIL_EXPO_HAUT: f64 = 1e21;
const SEUIL_EXPO_BAS: f64 = 1e-6;

/* ------------------------ Conversions de séparateur ------------------------ */

/// Canonique -> affichage ("12.5" -> "12,5").
pub fn vers_affichage(canon: &str) -> String {
    canon.replace(SEPARATEUR_CANONIQUE, &SEPARATEUR_AFFICHAGE.to_string())
}

/// Affichage -> canonique ("12,5" -> "12.5").
pub fn normaliser(affiche: &str) -> String {
    affiche.replace(SEPARATEUR_AFFICHAGE, &SEPARATEUR_CANONIQUE.to_string())
}

/* ------------------------ f64 -> texte ------------------------ */

/// Texte canonique le plus court qui relit exactement `x`.
///
/// - notation exponentielle si |x| >= 1e21 ou |x| < 1e-6 (ex: 1e+21, 1.5e-7)
/// - -0 s’écrit "0"
/// - non fini : "NaN", "Infinity", "-Infinity" (le moteur ne les affiche jamais)
pub fn format_canonique(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let a = x.abs();
    if !(SEUIL_EXPO_BAS..SEUIL_EXPO_HAUT).contains(&a) {
        let s = format!("{x:e}");
        return match s.split_once('e') {
            Some((mantisse, expo)) if !expo.starts_with('-') => format!("{mantisse}e+{expo}"),
            _ => s,
        };
    }

    format!("{x}")
}

/* ------------------------ texte -> f64 ------------------------ */

/// Lecture tolérante : plus long préfixe numérique valide, après normalisation `,` -> `.`.
///
/// - "12,"   -> 12
/// - "-0,5"  -> -0.5
/// - "1e+"   -> 1   (exposant incomplet ignoré)
/// - "-", "" -> None
pub fn lire_nombre(s: &str) -> Option<f64> {
    let canon = normaliser(s.trim());
    let b = canon.as_bytes();
    let n = b.len();
    let mut i = 0;

    if i < n && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }

    let debut = i;
    while i < n && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut nb_chiffres = i - debut;

    if i < n && b[i] == b'.' {
        i += 1;
        let debut_frac = i;
        while i < n && b[i].is_ascii_digit() {
            i += 1;
        }
        nb_chiffres += i - debut_frac;
    }

    if nb_chiffres == 0 {
        return None;
    }

    // Exposant : retenu seulement s’il a au moins un chiffre.
    let mut fin = i;
    if i < n && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < n && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let debut_expo = j;
        while j < n && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > debut_expo {
            fin = j;
        }
    }

    canon[..fin].parse::<f64>().ok()
}

/* ------------------------ Arrondi ------------------------ */

/// Arrondi décimal à `decimales` chiffres après la virgule.
pub fn arrondi(x: f64, decimales: usize) -> f64 {
    if !x.is_finite() {
        return x;
    }
    format!("{x:.decimales$}").parse::<f64>().unwrap_or(x)
}
