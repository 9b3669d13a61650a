//! Calculatrice sûre : évaluateur arithmétique à grammaire fermée.
//!
//! Le noyau ne fait aucune E/S ; le panneau (binaire) n’est qu’un appelant.

pub mod noyau;

pub use noyau::{evaluate, evaluate_saisie, normalize, ErreurCalcul};
