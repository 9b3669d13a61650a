//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : une expression générée entièrement parenthésée vaut
//!   exactement le calcul de référence fait pendant la génération

use std::time::{Duration, Instant};

use super::erreur::ErreurCalcul;
use super::{evaluate, evaluate_saisie};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Atome : petit entier ou demi-entier, parfois signé (zéro inclus, pour les divisions).
fn gen_atom(rng: &mut Rng) -> (String, f64) {
    let entier = rng.pick(10) as f64;
    let v = if rng.pick(4) == 0 {
        entier + 0.5
    } else {
        entier
    };
    if rng.pick(5) == 0 {
        (format!("-{v}"), -v)
    } else {
        (format!("{v}"), v)
    }
}

/// Expression entièrement parenthésée + valeur de référence.
/// `None` pour la valeur = division par zéro attendue.
fn gen_expr(rng: &mut Rng, depth: usize) -> (String, Option<f64>) {
    if depth == 0 || rng.pick(4) == 0 {
        let (s, v) = gen_atom(rng);
        return (s, Some(v));
    }

    let (sa, va) = gen_expr(rng, depth - 1);
    let (sb, vb) = gen_expr(rng, depth - 1);

    let (op, v) = match rng.pick(4) {
        0 => ("+", va.zip(vb).map(|(a, b)| a + b)),
        1 => ("-", va.zip(vb).map(|(a, b)| a - b)),
        2 => ("*", va.zip(vb).map(|(a, b)| a * b)),
        _ => (
            "/",
            match (va, vb) {
                (Some(_), Some(b)) if b == 0.0 => None,
                (Some(a), Some(b)) => Some(a / b),
                _ => None,
            },
        ),
    };

    (format!("({sa} {op} {sb})"), v)
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_reference_parenthesee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_div0 = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let (expr, reference) = gen_expr(&mut rng, 5);

        match (evaluate(&expr), reference) {
            (Ok(v), Some(r)) => {
                assert_eq!(v, r, "expr={expr:?}");
                seen_ok += 1;
            }
            (Err(ErreurCalcul::DivisionParZero), None) => seen_div0 += 1,
            (obtenu, attendu) => {
                panic!("expr={expr:?} obtenu={obtenu:?} attendu={attendu:?}");
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_div0 > 0, "aucune division par zéro vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(0xBADC0DE_u64);
    let mut b = Rng::new(0xBADC0DE_u64);

    for _ in 0..100 {
        let (ea, _) = gen_expr(&mut a, 4);
        let (eb, _) = gen_expr(&mut b, 4);
        assert_eq!(ea, eb);
        assert_eq!(evaluate(&ea), evaluate(&eb), "expr={ea:?}");
    }
}

#[test]
fn fuzz_safe_caracteres_aleatoires() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // alphabet de la saisie (boutons + clavier), espaces et 'e' compris
    let alphabet: Vec<char> = "0123456789.+-*/%() ×÷e".chars().collect();
    let mut rng = Rng::new(0x5EED_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let len = 1 + rng.pick(12) as usize;
        let s: String = (0..len)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();

        // ne doit jamais paniquer ; une valeur rendue est toujours finie
        match evaluate_saisie(&s) {
            Ok(v) => {
                assert!(v.is_finite(), "saisie={s:?} valeur={v}");
                seen_ok += 1;
            }
            Err(_) => seen_err += 1,
        }
    }

    assert!(seen_ok > 0, "aucun succès");
    assert!(seen_err > 0, "aucune erreur");
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("1/2", 800);
    budget(t0, max);

    // 800*(1/2) = 400
    assert_eq!(evaluate(&expr), Ok(400.0));
}

#[test]
fn fuzz_safe_somme_plate_sous_la_borne() {
    // arbre penché à gauche, profondeur 900 < 1000
    let expr = ["1"; 900].join("+");
    assert_eq!(evaluate(&expr), Ok(900.0));
}

#[test]
fn fuzz_safe_profondeur_pathologique() {
    // aucune de ces entrées ne doit épuiser la pile : refus propre
    let parentheses = format!("{}1{}", "(".repeat(5000), ")".repeat(5000));
    assert_eq!(evaluate(&parentheses), Err(ErreurCalcul::ExpressionInvalide));

    let signes = format!("{}1", "-".repeat(9000));
    assert_eq!(evaluate(&signes), Err(ErreurCalcul::ExpressionInvalide));

    let puissances = ["1"; 3000].join("**");
    assert_eq!(evaluate(&puissances), Err(ErreurCalcul::ExpressionInvalide));
}
