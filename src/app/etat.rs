//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, erreur, démarche, réglages)
//! et offrir les actions des touches sans logique d’affichage.
//!
//! Contrats :
//! - Aucun parsing ici : tout passe par le noyau (`evaluate_avec`).
//! - Actions déterministes, sans effet de bord caché.

use calculatrice_sure::noyau::{evaluate_avec, format_resultat, Demarche, ErreurCalcul, Reglages};

/// Symboles traités comme opérateurs par la saisie.
const OPERATEURS: &str = "+-×÷*/%";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur (remplacée par le résultat après "=") ---
    pub entree: String,

    // --- sorties ---
    pub erreur: Option<ErreurCalcul>,
    pub demarche: Option<Demarche>,

    // --- paramètres ---
    pub reglages: Reglages,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            erreur: None,
            demarche: None,
            reglages: Reglages::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “touches” ------------------------ */

    /// Ajoute un symbole (bouton ou clavier), avec la validation de base :
    /// - pas d’opérateur en tête, sauf le moins unaire
    /// - un opérateur qui suit un opérateur (ou un '.') le remplace,
    ///   sauf '-' qui peut suivre un autre opérateur (moins unaire)
    pub fn inserer(&mut self, texte: &str) {
        self.focus_entree = true;

        let est_operateur = texte.chars().count() == 1 && OPERATEURS.contains(texte);
        if est_operateur {
            let Some(dernier) = self.entree.chars().last() else {
                if texte != "-" {
                    return;
                }
                self.entree.push_str(texte);
                return;
            };

            if OPERATEURS.contains(dernier) || dernier == '.' {
                if texte == "-" && dernier != '-' {
                    // moins unaire après un autre opérateur : on ajoute
                } else {
                    self.entree.pop();
                    self.entree.push_str(texte);
                    return;
                }
            }
        }

        self.entree.push_str(texte);
    }

    /// C / Échap : effacer l’entrée et l’erreur.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.erreur = None;
        self.focus_entree = true;
    }

    /// ⌫ : retire le dernier symbole.
    pub fn backspace(&mut self) {
        self.entree.pop();
        self.focus_entree = true;
    }

    /// Frappe clavier libre : 'x' / 'X' valent '×'.
    pub fn saisie_clavier(&mut self) {
        if self.entree.contains(['x', 'X']) {
            self.entree = self.entree.replace(['x', 'X'], "×");
        }
    }

    /// = / Entrée : évalue via le noyau.
    /// - entrée vide : rien
    /// - succès : l’entrée devient le résultat formaté
    /// - échec : l’entrée est conservée, l’erreur est affichée
    pub fn calculer(&mut self) {
        self.focus_entree = true;

        let s = self.entree.trim();
        if s.is_empty() {
            return;
        }

        match evaluate_avec(s, &self.reglages) {
            Ok((valeur, demarche)) => {
                tracing::debug!(entree = s, valeur, "calcul");
                self.entree = format_resultat(valeur);
                self.erreur = None;
                self.demarche = Some(demarche);
            }
            Err(e) => {
                tracing::debug!(entree = s, erreur = %e, "calcul refusé");
                self.erreur = Some(e);
                self.demarche = None;
            }
        }
    }

    /// Message affiché pour l’erreur courante (titre + catégorie).
    pub fn message_erreur(&self) -> Option<String> {
        self.erreur.map(|e| {
            let titre = match e {
                ErreurCalcul::DivisionParZero => "Math Error",
                ErreurCalcul::ExpressionInvalide => "Input Error",
            };
            format!("{titre}: {e}")
        })
    }
}
