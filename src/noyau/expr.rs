// src/noyau/expr.rs
//
// AST arithmétique (ensemble FERMÉ).
// - Nombre  : littéral (feuille unique possible)
// - Binaire : + - * / // % **
// - Unaire  : - +
//
// IMPORTANT (SAFE):
// - Aucun autre type de noeud n’existe : identifiants, appels, chaînes, booléens
//   sont irreprésentables, le lecteur les refuse avant d’arriver ici.
// - Arbre strict : chaque enfant appartient à son parent (Box), pas de partage.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    FloorDiv,
    Pow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpUnaire {
    Neg,
    Pos,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),
    Binaire(OpBinaire, Box<Expr>, Box<Expr>),
    Unaire(OpUnaire, Box<Expr>),
}

impl OpBinaire {
    pub fn symbole(self) -> &'static str {
        match self {
            OpBinaire::Add => "+",
            OpBinaire::Sub => "-",
            OpBinaire::Mul => "*",
            OpBinaire::Div => "/",
            OpBinaire::Mod => "%",
            OpBinaire::FloorDiv => "//",
            OpBinaire::Pow => "**",
        }
    }

    /// Opérateurs qui exigent un diviseur non nul.
    pub fn divise(self) -> bool {
        matches!(self, OpBinaire::Div | OpBinaire::FloorDiv | OpBinaire::Mod)
    }
}

impl OpUnaire {
    pub fn symbole(self) -> &'static str {
        match self {
            OpUnaire::Neg => "-",
            OpUnaire::Pos => "+",
        }
    }
}

impl Expr {
    pub fn binaire(op: OpBinaire, a: Expr, b: Expr) -> Expr {
        Expr::Binaire(op, Box::new(a), Box::new(b))
    }

    pub fn unaire(op: OpUnaire, x: Expr) -> Expr {
        Expr::Unaire(op, Box::new(x))
    }
}

/// Affichage entièrement parenthésé (démarche) : la structure se lit sans
/// connaître les priorités.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Nombre(n) => write!(f, "{n}"),
            Expr::Binaire(op, a, b) => write!(f, "({a} {} {b})", op.symbole()),
            Expr::Unaire(op, x) => write!(f, "{}{x}", op.symbole()),
        }
    }
}
