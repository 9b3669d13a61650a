//! Noyau — évaluation (frontière publique)
//!
//! saisie -> canon -> jetons -> RPN -> Expr -> lecture f64
//!
//! Toutes les erreurs internes (String) sont repliées ici en
//! `ErreurCalcul::ExpressionInvalide` ; rien d’autre ne sort du noyau.

use super::canon::normalize;
use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::expr::Expr;
use super::jetons::{format_tokens, tokenize, Tok};
use super::lecture::eval_f64;
use super::rpn::{from_rpn, to_rpn};

/// Profondeur d’arbre par défaut (parenthèses, signes, opérateurs en cascade).
pub const PROFONDEUR_MAX_DEFAUT: usize = 1000;

/// Longueur d’entrée par défaut (en caractères, après canonisation).
pub const LONGUEUR_MAX_DEFAUT: usize = 10_000;

/// Garde-fous du noyau.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub profondeur_max: usize,
    pub longueur_max: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            profondeur_max: PROFONDEUR_MAX_DEFAUT,
            longueur_max: LONGUEUR_MAX_DEFAUT,
        }
    }
}

#[derive(Default, Clone, Debug)]
pub struct Demarche {
    pub canonique: String,
    pub jetons: String,
    pub rpn: String,
    pub arbre: String,
}

struct Lecture {
    jetons: Vec<Tok>,
    rpn: Vec<Tok>,
    arbre: Expr,
    valeur: f64,
}

/// Évalue une chaîne DÉJÀ canonique (ici `%` est le modulo).
pub fn evaluate(canonique: &str) -> ResultatCalcul<f64> {
    lire(canonique, &Reglages::default()).map(|l| l.valeur)
}

/// Saisie brute : normalise (× ÷ %) puis évalue.
pub fn evaluate_saisie(saisie: &str) -> ResultatCalcul<f64> {
    evaluate(&normalize(saisie))
}

/// Saisie brute + réglages explicites ; rend aussi la démarche (panneau).
pub fn evaluate_avec(saisie: &str, reglages: &Reglages) -> ResultatCalcul<(f64, Demarche)> {
    let canonique = normalize(saisie);
    let l = lire(&canonique, reglages)?;

    let d = Demarche {
        canonique: canonique.trim().to_string(),
        jetons: format_tokens(&l.jetons),
        rpn: format_tokens(&l.rpn),
        arbre: l.arbre.to_string(),
    };

    Ok((l.valeur, d))
}

fn lire(canonique: &str, reglages: &Reglages) -> ResultatCalcul<Lecture> {
    let s = canonique.trim();
    if s.is_empty() {
        return Err(rejet("entrée vide"));
    }
    if s.chars().count() > reglages.longueur_max {
        return Err(rejet(format!(
            "entrée trop longue (> {} caractères)",
            reglages.longueur_max
        )));
    }

    tracing::trace!(canonique = s, "lecture");

    // 1) Jetons
    let jetons = tokenize(s).map_err(rejet)?;

    // 2) RPN (grammaire fermée + imbrication bornée)
    let rpn = to_rpn(&jetons, reglages.profondeur_max).map_err(rejet)?;

    // 3) AST (profondeur bornée)
    let arbre = from_rpn(&rpn, reglages.profondeur_max).map_err(rejet)?;

    // 4) Valeur
    let valeur = eval_f64(&arbre)?;
    if !valeur.is_finite() {
        return Err(rejet(format!("résultat non fini: {valeur}")));
    }

    tracing::trace!(valeur, "résultat");

    Ok(Lecture {
        jetons,
        rpn,
        arbre,
        valeur,
    })
}

fn rejet(raison: impl Into<String>) -> ErreurCalcul {
    let raison = raison.into();
    tracing::debug!(%raison, "expression rejetée");
    ErreurCalcul::ExpressionInvalide
}
