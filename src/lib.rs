//! Calculatrice standard — bibliothèque
//!
//! Le noyau (moteur à touches) est utilisable sans affichage :
//! l’application egui (src/main.rs + src/app) n’en est qu’un client.

pub mod noyau;
