// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran deux lignes : historique (petit) + entrée courante (taille réglable)
// - Pavé mémoire + pavé standard ; chaque bouton porte la valeur de sa touche
// - Clavier : géré dans app.rs (adaptateur), pas ici
//
// Note :
// - Libellés ASCII/Latin-1 seulement (polices egui par défaut, pas de “carrés”)

use eframe::egui;

use super::etat::{AppCalc, TAILLE_POLICE_MAX, TAILLE_POLICE_MIN};
use calculatrice::noyau::Touche;

/// Taille (px) de la ligne d’historique.
const TAILLE_HISTORIQUE: f32 = 16.0;

const TAILLE_BOUTON: [f32; 2] = [72.0, 44.0];
const TAILLE_BOUTON_MEMOIRE: [f32; 2] = [54.0, 28.0];

/// (libellé, valeur de la touche)
const RANGEE_MEMOIRE: [(&str, &str); 5] = [
    ("MC", "MC"),
    ("MR", "MR"),
    ("M+", "M+"),
    ("M-", "M-"),
    ("MS", "MS"),
];

const PAVE: [[(&str, &str); 4]; 6] = [
    [("%", "%"), ("CE", "CE"), ("C", "C"), ("DEL", "BACKSPACE")],
    [("1/x", "1/x"), ("x²", "x^2"), ("sqrt", "sqrt"), ("÷", "/")],
    [("7", "7"), ("8", "8"), ("9", "9"), ("×", "*")],
    [("4", "4"), ("5", "5"), ("6", "6"), ("-", "-")],
    [("1", "1"), ("2", "2"), ("3", "3"), ("+", "+")],
    [("+/-", "+/-"), ("0", "0"), (",", ","), ("=", "=")],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(6.0);
        self.ui_reglages(ui);

        ui.add_space(6.0);
        ui.separator();
        ui.add_space(6.0);

        self.ui_memoire(ui);

        ui.add_space(6.0);
        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let rendu = self.rendu();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // Historique vide : on garde la hauteur de la ligne (pas de saut d’écran).
                    let historique = if rendu.historique.is_empty() {
                        " "
                    } else {
                        rendu.historique.as_str()
                    };
                    ui.label(
                        egui::RichText::new(historique)
                            .monospace()
                            .size(TAILLE_HISTORIQUE)
                            .weak(),
                    );
                    ui.label(
                        egui::RichText::new(rendu.courant.as_str())
                            .monospace()
                            .size(self.taille_police)
                            .strong(),
                    );
                });
            });
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Taille :");
            let mut px = self.taille_police;
            let resp = ui.add(
                egui::Slider::new(&mut px, TAILLE_POLICE_MIN..=TAILLE_POLICE_MAX).suffix(" px"),
            );
            if resp.changed() {
                self.set_taille_police(px);
            }
        });
    }

    fn ui_memoire(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for (label, valeur) in RANGEE_MEMOIRE {
                self.bouton_touche(ui, label, valeur, TAILLE_BOUTON_MEMOIRE);
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_standard")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for (label, valeur) in rangee {
                        self.bouton_touche(ui, label, valeur, TAILLE_BOUTON);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, label: &str, valeur: &str, taille: [f32; 2]) {
        let mut bouton = egui::Button::new(label);
        if valeur == "=" {
            bouton = bouton.fill(ui.visuals().selection.bg_fill);
        }

        if !ui.add_sized(taille, bouton).clicked() {
            return;
        }

        match Touche::depuis_valeur(valeur) {
            Some(t) => self.appuyer(t),
            None => tracing::warn!(valeur, "bouton sans touche associée"),
        }
    }
}
