// src/noyau/erreur.rs
//
// Taxonomie publique : deux catégories seulement.
// Les étapes internes (jetons, RPN, arbre) travaillent en Result<_, String> ;
// la frontière (eval.rs) replie tout ici.

use thiserror::Error;

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// Diviseur nul pour `/`, `//` ou `%` (et `0 ** négatif`).
    #[error("division by zero")]
    DivisionParZero,

    /// Tout le reste : vide, hors grammaire, trop profond, non fini.
    #[error("invalid input")]
    ExpressionInvalide,
}

pub type ResultatCalcul<T> = Result<T, ErreurCalcul>;
