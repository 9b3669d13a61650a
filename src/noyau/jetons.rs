// src/noyau/jetons.rs

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    DoubleStar, // **
    Slash,
    DoubleSlash, // //
    Percent,     // modulo (la forme canonique n’en contient plus, voir canon.rs)

    // Signes préfixes : jamais produits par tokenize(), seulement par to_rpn()
    // quand un + / - arrive en position unaire.
    Neg,
    Pos,

    LPar,
    RPar,
}

/// Tokenize une chaîne canonique en jetons.
/// Supporte:
/// - entiers (ex: 12) et décimaux (ex: 1.5, 1., .5)
/// - notation scientifique (ex: 1e3, 2.5E-4)
/// - opérateurs + - * ** / // %
/// - parenthèses ( )
///
/// Tout autre caractère est refusé (identifiants, guillemets, ';', ',', '^', ...).
pub fn tokenize(s: &str) -> Result<Vec<Tok>, String> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Opérateurs doubles d’abord (** et //)
        let suivant = chars.get(i + 1).copied();
        match (c, suivant) {
            ('*', Some('*')) => {
                out.push(Tok::DoubleStar);
                i += 2;
                continue;
            }
            ('/', Some('/')) => {
                out.push(Tok::DoubleSlash);
                i += 2;
                continue;
            }
            _ => {}
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '%' => Some(Tok::Percent),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let n = lire_nombre(&chars, &mut i)?;
            out.push(Tok::Num(n));
            continue;
        }

        return Err(format!("caractère inattendu: '{c}'"));
    }

    Ok(out)
}

/// Lit un littéral numérique à partir de `chars[*i]` et avance `*i`.
///
/// Forme acceptée : `chiffres [. chiffres?] | . chiffres`, puis exposant optionnel
/// `(e|E) [+|-] chiffres`.
fn lire_nombre(chars: &[char], i: &mut usize) -> Result<f64, String> {
    let start = *i;

    let debut_entier = *i;
    while *i < chars.len() && chars[*i].is_ascii_digit() {
        *i += 1;
    }
    let nb_entier = *i - debut_entier;

    let mut a_point = false;
    let mut nb_frac = 0usize;
    if *i < chars.len() && chars[*i] == '.' {
        a_point = true;
        *i += 1;
        let debut_frac = *i;
        while *i < chars.len() && chars[*i].is_ascii_digit() {
            *i += 1;
        }
        nb_frac = *i - debut_frac;
    }

    if nb_entier == 0 && nb_frac == 0 {
        return Err("nombre invalide: '.' isolé".into());
    }

    let mut a_exposant = false;
    if *i < chars.len() && (chars[*i] == 'e' || chars[*i] == 'E') {
        a_exposant = true;
        *i += 1;
        if *i < chars.len() && (chars[*i] == '+' || chars[*i] == '-') {
            *i += 1;
        }
        let debut_exp = *i;
        while *i < chars.len() && chars[*i].is_ascii_digit() {
            *i += 1;
        }
        if *i == debut_exp {
            return Err("exposant incomplet".into());
        }
    }

    let texte: String = chars[start..*i].iter().collect();

    // Entier pur : zéros de tête refusés ("007"), sauf si tout est zéro ("000").
    if !a_point
        && !a_exposant
        && nb_entier > 1
        && texte.starts_with('0')
        && texte.chars().any(|c| c != '0')
    {
        return Err(format!("zéros de tête interdits: {texte}"));
    }

    texte
        .parse::<f64>()
        .map_err(|_| format!("nombre invalide: {texte}"))
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(n) => format!("{n}"),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::DoubleStar => "**".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::DoubleSlash => "//".to_string(),
            Tok::Percent => "%".to_string(),

            Tok::Neg => "neg".to_string(),
            Tok::Pos => "pos".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
