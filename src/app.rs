// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Adaptateur clavier : événements egui -> Touche (une touche par action)
//
// Important:
// - Le clavier est lu ici, une seule fois par frame, AVANT de dessiner :
//   l’écran reflète déjà les touches de la frame courante.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use calculatrice::noyau::Touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let touches = ctx.input(|i| touches_clavier(&i.events));
        for touche in touches {
            self.appuyer(touche);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

/// Traduit les événements clavier de la frame en touches.
///
/// - texte saisi : un caractère = un raccourci possible (chiffres, `,` `.`, `+ - * /`)
/// - touches nommées : Enter, Backspace, Escape
fn touches_clavier(events: &[egui::Event]) -> Vec<Touche> {
    let mut out = Vec::new();

    for ev in events {
        match ev {
            egui::Event::Text(texte) => {
                let mut buf = [0u8; 4];
                out.extend(
                    texte
                        .chars()
                        .filter_map(|c| Touche::depuis_clavier(c.encode_utf8(&mut buf))),
                );
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => {
                if let Some(t) = nom_touche(*key).and_then(Touche::depuis_clavier) {
                    out.push(t);
                }
            }
            _ => {}
        }
    }

    out
}

fn nom_touche(key: egui::Key) -> Option<&'static str> {
    match key {
        egui::Key::Enter => Some("Enter"),
        egui::Key::Backspace => Some("Backspace"),
        egui::Key::Escape => Some("Escape"),
        _ => None,
    }
}
