// src/noyau/lecture.rs
//
// Lecture numérique de l’arbre : parcours post-ordre (gauche avant droite).
// Profondeur déjà bornée par rpn.rs, la récursion reste donc sûre.

use num_traits::{Float, Zero};

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::expr::{Expr, OpBinaire, OpUnaire};

/* ------------------------ Division “plancher” ------------------------ */

/// (a // b, a % b) avec la convention du signe du diviseur.
///
/// Même correction flottante que divmod() côté Python : on part de fmod, on
/// recale le reste sur le signe de b, puis on arrondit le quotient exact
/// (a - reste) / b au plus proche pour absorber l’erreur d’arrondi.
/// Précondition : b != 0.
fn divmod_plancher(a: f64, b: f64) -> (f64, f64) {
    let mut reste = a % b;
    let mut quotient = (a - reste) / b;

    if !reste.is_zero() {
        if (b < 0.0) != (reste < 0.0) {
            reste += b;
            quotient -= 1.0;
        }
    } else {
        reste = 0.0f64.copysign(b);
    }

    let plancher = if !quotient.is_zero() {
        let q = quotient.floor();
        if quotient - q > 0.5 {
            q + 1.0
        } else {
            q
        }
    } else {
        0.0f64.copysign(a / b)
    };

    (plancher, reste)
}

pub fn floor_div(a: f64, b: f64) -> f64 {
    divmod_plancher(a, b).0
}

pub fn modulo(a: f64, b: f64) -> f64 {
    divmod_plancher(a, b).1
}

/// a ** b ; `0 ** négatif` est une division par zéro.
fn puissance(a: f64, b: f64) -> ResultatCalcul<f64> {
    if a.is_zero() && b < 0.0 {
        tracing::debug!(base = a, exposant = b, "zéro élevé à une puissance négative");
        return Err(ErreurCalcul::DivisionParZero);
    }
    Ok(Float::powf(a, b))
}

/* ------------------------ Évaluation ------------------------ */

/// Évalue un arbre en f64.
/// - Division par zéro détectée AVANT le calcul de / // %, sans aller plus loin.
/// - Le résultat peut être non fini (NaN, ±∞) : c’est la frontière (eval.rs) qui tranche.
pub fn eval_f64(expr: &Expr) -> ResultatCalcul<f64> {
    match expr {
        Expr::Nombre(n) => Ok(*n),

        Expr::Unaire(op, x) => {
            let v = eval_f64(x)?;
            Ok(match op {
                OpUnaire::Neg => -v,
                OpUnaire::Pos => v,
            })
        }

        Expr::Binaire(op, a, b) => {
            let va = eval_f64(a)?;
            let vb = eval_f64(b)?;

            if op.divise() && vb.is_zero() {
                tracing::debug!(gauche = va, op = op.symbole(), "diviseur nul");
                return Err(ErreurCalcul::DivisionParZero);
            }

            match op {
                OpBinaire::Add => Ok(va + vb),
                OpBinaire::Sub => Ok(va - vb),
                OpBinaire::Mul => Ok(va * vb),
                OpBinaire::Div => Ok(va / vb),
                OpBinaire::FloorDiv => Ok(floor_div(va, vb)),
                OpBinaire::Mod => Ok(modulo(va, vb)),
                OpBinaire::Pow => puissance(va, vb),
            }
        }
    }
}
