//! Noyau sûr (arithmétique fermée)
//!
//! Organisation interne :
//! - canon.rs    : forme canonique (× ÷ %)
//! - jetons.rs   : tokenisation
//! - rpn.rs      : shunting-yard + construction Expr (profondeur bornée)
//! - expr.rs     : AST fermé (Nombre / Binaire / Unaire)
//! - lecture.rs  : valeur f64 (post-ordre, division par zéro)
//! - format.rs   : affichage du résultat (côté appelant)
//! - erreur.rs   : deux catégories d’erreur
//! - eval.rs     : pipeline complet + réglages

pub mod canon;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod lecture;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use canon::normalize;
pub use erreur::ErreurCalcul;
pub use eval::{evaluate, evaluate_avec, evaluate_saisie, Demarche, Reglages};
pub use format::format_resultat;
