// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en validant la grammaire fermée
// - Puis reconstruire Expr
//
// Priorités (compatibles Python):
//   + -            1  gauche
//   * / // %       2  gauche
//   signe unaire   3  préfixe
//   **             4  droite  (et plus fort que le signe à sa GAUCHE seulement)
// Donc: -2**2 = -(2**2), 2**-1 = 2**(-1), -7//2 = (-7)//2.
//
// Garde-fous:
// - imbrication de parenthèses bornée
// - profondeur de l’arbre bornée (chaînes de signes, ** en cascade, longues sommes)
// Les deux passes sont itératives : seule l’évaluation récursive consomme la pile,
// d’où la borne sur la profondeur.

use super::expr::{Expr, OpBinaire, OpUnaire};
use super::jetons::Tok;

fn precedence(t: &Tok) -> u8 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::DoubleSlash | Tok::Percent => 2,
        Tok::Neg | Tok::Pos => 3,
        Tok::DoubleStar => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::DoubleStar)
}

fn op_binaire(t: &Tok) -> Option<OpBinaire> {
    match t {
        Tok::Plus => Some(OpBinaire::Add),
        Tok::Minus => Some(OpBinaire::Sub),
        Tok::Star => Some(OpBinaire::Mul),
        Tok::Slash => Some(OpBinaire::Div),
        Tok::DoubleSlash => Some(OpBinaire::FloorDiv),
        Tok::Percent => Some(OpBinaire::Mod),
        Tok::DoubleStar => Some(OpBinaire::Pow),
        _ => None,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Minus, Num(2), DoubleStar, Num(2)]
///   rpn:    [Num(2), Num(2), DoubleStar, Neg]
pub fn to_rpn(tokens: &[Tok], profondeur_max: usize) -> Result<Vec<Tok>, String> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une parenthèse fermée.
    // Sert à détecter les signes unaires et les juxtapositions interdites.
    let mut prev_was_value = false;
    let mut parentheses: usize = 0;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err("deux valeurs adjacentes".into());
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                // "2(3)" ou "(1)(2)" : pas d’appel, pas de multiplication implicite
                if prev_was_value {
                    return Err("parenthèse ouvrante après une valeur".into());
                }
                parentheses += 1;
                if parentheses > profondeur_max {
                    return Err("parenthèses trop imbriquées".into());
                }
                ops.push(tok);
            }

            Tok::RPar => {
                // couvre "()" et "(1+)"
                if !prev_was_value {
                    return Err("parenthèse fermante inattendue".into());
                }

                // dépile jusqu’à '('
                let mut ouvrante = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante {
                    return Err("parenthèse fermante sans ouvrante".into());
                }
                parentheses -= 1;
            }

            // signe en position unaire : opérateur préfixe, rien à dépiler
            Tok::Plus | Tok::Minus if !prev_was_value => {
                let signe = if matches!(tok, Tok::Minus) {
                    Tok::Neg
                } else {
                    Tok::Pos
                };
                ops.push(signe);
            }

            Tok::Plus
            | Tok::Minus
            | Tok::Star
            | Tok::Slash
            | Tok::DoubleSlash
            | Tok::Percent
            | Tok::DoubleStar => {
                if !prev_was_value {
                    return Err("opérateur sans opérande gauche".into());
                }

                let p_tok = precedence(&tok);
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }

                    let p_top = precedence(top);
                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(t) = ops.pop() {
                        out.push(t);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Neg | Tok::Pos => return Err("jeton interne inattendu".into()),
        }
    }

    // couvre l’entrée vide et l’opérateur final ("1+")
    if !prev_was_value {
        return Err("expression incomplète".into());
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err("parenthèses non fermées".into());
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN, en bornant la profondeur de l’arbre.
pub fn from_rpn(rpn: &[Tok], profondeur_max: usize) -> Result<Expr, String> {
    // (noeud, profondeur du sous-arbre)
    let mut st: Vec<(Expr, usize)> = Vec::new();

    let borne = |d: usize| -> Result<usize, String> {
        if d > profondeur_max {
            Err(format!("arbre trop profond (> {profondeur_max})"))
        } else {
            Ok(d)
        }
    };

    for tok in rpn {
        match tok {
            Tok::Num(n) => st.push((Expr::Nombre(*n), borne(1)?)),

            Tok::Neg | Tok::Pos => {
                let (x, d) = st.pop().ok_or("signe sans opérande")?;
                let op = if matches!(tok, Tok::Neg) {
                    OpUnaire::Neg
                } else {
                    OpUnaire::Pos
                };
                st.push((Expr::unaire(op, x), borne(d + 1)?));
            }

            Tok::LPar | Tok::RPar => return Err("parenthèse inattendue en RPN".into()),

            _ => {
                let op = op_binaire(tok).ok_or("jeton inattendu en RPN")?;
                let (b, db) = st.pop().ok_or("expression invalide")?;
                let (a, da) = st.pop().ok_or("expression invalide")?;
                st.push((Expr::binaire(op, a, b), borne(da.max(db) + 1)?));
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some((e, _)), true) => Ok(e),
        _ => Err("expression invalide".into()),
    }
}
