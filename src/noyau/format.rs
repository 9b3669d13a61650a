// src/noyau/format.rs
//
// Affichage du résultat (côté appelant) : le noyau rend la valeur exacte en f64,
// la mise en forme se fait ici.
// - entier représenté en flottant : "4" et non "4.0"
// - -0 : "0"
// - très grand (>= 1e16) ou très petit (< 1e-4) : forme exposant "1.5e-7", "1e+20"
// - sinon : plus courte écriture qui relit la même valeur

const SEUIL_GRAND: f64 = 1e16;
const SEUIL_PETIT: f64 = 1e-4;

pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let a = v.abs();
    if !(SEUIL_PETIT..SEUIL_GRAND).contains(&a) {
        return format_exposant(v);
    }

    // Display de f64 : déjà sans ".0" pour les entiers, et aller-retour exact
    format!("{v}")
}

fn format_exposant(v: f64) -> String {
    let s = format!("{v:e}");
    match s.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => s,
    }
}
