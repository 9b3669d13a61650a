//! Tests scientifiques (campagne) : propriétés observables à la frontière publique.
//!
//! - priorités, associativité, signes
//! - division “plancher” et modulo cohérents
//! - taxonomie d’erreurs à deux catégories seulement
//! - grammaire fermée : tout ce qui n’est pas arithmétique est refusé
//! - canonisation (× ÷ %) avant lecture

use super::canon::normalize;
use super::erreur::ErreurCalcul;
use super::format::format_resultat;
use super::{evaluate, evaluate_saisie};

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_val(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() <= 1e-12 * attendu.abs().max(1.0),
        "expr={expr:?} obtenu={v} attendu={attendu}"
    );
}

fn assert_invalide(expr: &str) {
    assert_eq!(
        evaluate(expr),
        Err(ErreurCalcul::ExpressionInvalide),
        "expr={expr:?}"
    );
}

fn assert_div0(expr: &str) {
    assert_eq!(
        evaluate(expr),
        Err(ErreurCalcul::DivisionParZero),
        "expr={expr:?}"
    );
}

/* ------------------------ Priorités ------------------------ */

#[test]
fn sci_priorites_et_parentheses() {
    assert_val("2+3*4", 14.0);
    assert_val("(2+3)*4", 20.0);
    assert_val("2*3+4*5", 26.0);
    assert_val("100/10/5", 2.0);
    assert_val("100/(10/5)", 50.0);
    assert_val("2**3**2", 512.0);
    assert_val("(2**3)**2", 64.0);
    assert_val("7-2*3**2//4", 3.0);
}

#[test]
fn sci_signes_unaires() {
    assert_val("-3+5", 2.0);
    assert_val("-(3+5)", -8.0);
    assert_val("-2**2", -4.0);
    assert_val("2**-2", 0.25);
    assert_val("-2**-2", -0.25);
    assert_val("3*-2", -6.0);
    assert_val("+5", 5.0);
}

#[test]
fn sci_plancher_et_modulo() {
    assert_val("7//2", 3.0);
    assert_val("-7//2", -4.0);
    assert_val("7//-2", -4.0);
    assert_val("7.5//2", 3.0);
    assert_val("-7%3", 2.0);
    assert_val("7%-3", -2.0);

    // a == (a // b) * b + a % b
    for (a, b) in [(17.0, 5.0), (-17.0, 5.0), (17.0, -5.0), (-17.0, -5.0)] {
        let s = format!("({a})//({b})*({b}) + ({a})%({b})");
        assert_val(&s, a);
    }
}

#[test]
fn sci_puissances_fractionnaires() {
    assert_val("16**0.5", 4.0);
    assert_val("8**(1/3)", 2.0);
    assert_val("2**0.5*2**0.5", 2.0);
    assert_val("10**-3", 0.001);
}

#[test]
fn sci_notation_scientifique() {
    assert_val("1e3+1", 1001.0);
    assert_val("2.5e-1*4", 1.0);
    assert_invalide("1e");
    assert_invalide("e3");
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_vides() {
    assert_invalide("");
    assert_invalide("   ");
    assert_invalide("\t\n");
}

#[test]
fn sci_divisions_par_zero() {
    assert_div0("5/0");
    assert_div0("5//0");
    assert_div0("5%0");
    assert_div0("1/(0.5-0.5)");
    assert_div0("1/-0");
    assert_div0("0**-1");
}

#[test]
fn sci_division_par_zero_avant_le_reste() {
    // l’échec est immédiat : le reste de l’arbre n’est pas évalué
    assert_div0("(1/0) + (2**10000)");
}

#[test]
fn sci_grammaire_fermee() {
    for s in [
        "__import__('os')",
        "1;2",
        "True",
        "None",
        "pi",
        "sqrt(4)",
        "(1,2)",
        "[1]",
        "{1}",
        "'1'",
        "1 < 2",
        "1 == 1",
        "not 1",
        "1 & 1",
        "1 << 2",
        "~1",
        "2^3",
        "a := 1",
        "lambda: 1",
        "1\n2",
        "0x10",
        "1j",
        "1_0",
    ] {
        assert_invalide(s);
    }
}

#[test]
fn sci_structure_invalide() {
    for s in ["2 3", "2(3)", "(2)(3)", "()", "(1+2", "1+2)", "*3", "3*", "3**", "1 +* 2", "..5", "1..2"] {
        assert_invalide(s);
    }
}

#[test]
fn sci_resultats_non_finis() {
    assert_invalide("(-8)**(1/3)");
    assert_invalide("1e308*10");
    assert_invalide("1e999");
}

/* ------------------------ Canonisation ------------------------ */

#[test]
fn sci_canonisation() {
    assert_eq!(normalize("5×3÷2"), "5*3/2");
    assert_eq!(evaluate_saisie("5×3÷2"), Ok(7.5));
    assert_eq!(evaluate_saisie("10%×50"), Ok(5.0));
    assert_eq!(evaluate_saisie("(12+8)%"), Ok(0.2));
}

#[test]
fn sci_pourcent_et_modulo_se_recouvrent() {
    // même texte, deux lectures selon le point d’entrée
    assert_eq!(evaluate("7%2"), Ok(1.0));
    assert_val(&normalize("7%2"), 7.0 / 1002.0);
}

/* ------------------------ Affichage (côté appelant) ------------------------ */

#[test]
fn sci_affichage_sans_zero_final() {
    assert_eq!(format_resultat(eval_ok("8/2")), "4");
    assert_eq!(format_resultat(eval_ok("7/2")), "3.5");
    assert_eq!(format_resultat(eval_ok("-7//2")), "-4");
    assert_eq!(format_resultat(eval_ok("0*-1")), "0");
}
