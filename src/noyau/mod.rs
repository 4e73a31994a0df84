//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - touche.rs   : vocabulaire des touches (boutons + raccourcis clavier)
//! - format.rs   : frontière de formatage (f64 <-> texte, virgule décimale)
//! - eval.rs     : évaluateur binaire (gauche, opérateur, droite)
//! - moteur.rs   : machine à états (EtatCalc + transitions + rendu)

pub mod eval;
pub mod format;
pub mod moteur;
pub mod touche;

#[cfg(test)]
mod tests_scenarios;


// API publique minimale
pub use moteur::{appliquer, appliquer_sequence, EtatCalc, Rendu, Sentinelle};
pub use touche::{Memoire, Operateur, Touche};
