// src/noyau/canon.rs
//
// Forme canonique : réécriture de surface AVANT les jetons.
// - × -> *
// - ÷ -> /
// - % -> /100 (substitution aveugle, chaque '%' quelle que soit sa position)
//
// NOTE (ambiguïté assumée) :
// - Après normalisation, aucun '%' n’atteint le lecteur : "7%2" devient "7/1002".
// - Le modulo reste disponible, mais seulement via `evaluate` sur une chaîne
//   déjà canonique (sans passer par ici).

/// Réécrit la saisie brute en forme canonique. Fonction totale.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);

    for c in input.chars() {
        match c {
            '×' => out.push('*'),
            '÷' => out.push('/'),
            '%' => out.push_str("/100"),
            _ => out.push(c),
        }
    }

    out
}
