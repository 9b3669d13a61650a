// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus), 'x' devient '×'
// - Tactile : pavé 4 colonnes, focus redonné après clic (focus_entree)
//
// La vue ne fait qu’assembler la chaîne et afficher : aucune évaluation ici.

use eframe::egui;

use super::etat::AppCalc;

/// Pavé : (libellé, action), 4 colonnes.
const PAVE: [[(&str, Touche); 4]; 5] = [
    [
        ("C", Touche::Effacer),
        ("⌫", Touche::Retour),
        ("%", Touche::Symbole("%")),
        ("÷", Touche::Symbole("÷")),
    ],
    [
        ("7", Touche::Symbole("7")),
        ("8", Touche::Symbole("8")),
        ("9", Touche::Symbole("9")),
        ("×", Touche::Symbole("×")),
    ],
    [
        ("4", Touche::Symbole("4")),
        ("5", Touche::Symbole("5")),
        ("6", Touche::Symbole("6")),
        ("-", Touche::Symbole("-")),
    ],
    [
        ("1", Touche::Symbole("1")),
        ("2", Touche::Symbole("2")),
        ("3", Touche::Symbole("3")),
        ("+", Touche::Symbole("+")),
    ],
    [
        ("(", Touche::Symbole("(")),
        ("0", Touche::Symbole("0")),
        (")", Touche::Symbole(")")),
        (".", Touche::Symbole(".")),
    ],
];

const TAILLE_TOUCHE: [f32; 2] = [72.0, 52.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_entree(ui);

        ui.add_space(8.0);
        self.ui_pave(ui);

        if let Some(msg) = self.message_erreur() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, msg);
        }

        ui.add_space(8.0);
        ui.separator();
        self.ui_demarche(ui);
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .font(egui::TextStyle::Heading)
                .horizontal_align(egui::Align::RIGHT)
                .id_salt("entree_edit"),
        );

        if resp.changed() {
            self.saisie_clavier();
        }

        // Si on a cliqué un bouton, on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue : lost_focus() car le TextEdit singleline perd le focus sur Enter
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.calculer();
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for (label, touche) in ligne {
                        self.bouton(ui, label, touche);
                    }
                    ui.end_row();
                }
            });

        let largeur = 4.0 * TAILLE_TOUCHE[0] + 3.0 * 6.0;
        let eq = ui.add_sized([largeur, TAILLE_TOUCHE[1]], egui::Button::new(texte_touche("=")));
        if eq.clicked() {
            self.calculer();
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| match &self.demarche {
                Some(d) => {
                    ui.monospace(format!("Canonique : {}", d.canonique));
                    ui.monospace(format!("Jetons    : {}", d.jetons));
                    ui.monospace(format!("RPN       : {}", d.rpn));
                    ui.monospace(format!("Arbre     : {}", d.arbre));
                }
                None => {
                    ui.monospace("—");
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(texte_touche(label)));
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Symbole(s) => self.inserer(s),
            Touche::Effacer => self.clear_entree(),
            Touche::Retour => self.backspace(),
        }
    }
}

fn texte_touche(label: &str) -> egui::RichText {
    egui::RichText::new(label).size(20.0)
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Symbole(&'static str),
    Effacer,
    Retour,
}
