// src/noyau/rendu.rs
//
// Rendu texte (aucun état)
// - texte canonique d’un nombre (registre, ligne de pile)
// - ligne de pile : texte simple + balisage HTML (<span> par entrée)

use super::pile::{Entree, Pile};

/// Au-delà (ou en deçà) de ces bornes, le texte passe en notation exponentielle.
const BORNE_EXPOSANT_HAUTE: f64 = 1e21;
const BORNE_EXPOSANT_BASSE: f64 = 1e-6;

/// Texte canonique d’une valeur calculée.
///
/// - entier => sans partie décimale ("14", pas "14.0")
/// - plus courte écriture décimale qui relit la même valeur
/// - |x| >= 1e21 ou |x| < 1e-6 => exposant signé ("1e+21", "1.5e-7")
/// - -0 => "0"
/// - ±∞ => "Infinity" / "-Infinity", NaN => "NaN"
pub fn texte_canonique(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let a = x.abs();
    if a >= BORNE_EXPOSANT_HAUTE || a < BORNE_EXPOSANT_BASSE {
        // "{:e}" donne "1e21" / "1e-7" : on ajoute le signe des exposants positifs.
        let s = format!("{x:e}");
        return match s.split_once('e') {
            Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
            _ => s,
        };
    }
    format!("{x}")
}

/// Relit un texte de registre comme parseFloat : plus long préfixe numérique
/// ("12abc" => 12, "Infinity5" => ∞), NaN si aucun chiffre en tête.
pub fn lire_valeur(texte: &str) -> f64 {
    let t = texte.trim_start();
    let (signe, reste) = match t.as_bytes().first() {
        Some(b'-') => (-1.0, &t[1..]),
        Some(b'+') => (1.0, &t[1..]),
        _ => (1.0, t),
    };
    if reste.starts_with("Infinity") {
        return signe * f64::INFINITY;
    }

    let b = reste.as_bytes();
    let mut i = 0;
    let mut chiffres = 0;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
        chiffres += 1;
    }
    if i < b.len() && b[i] == b'.' {
        i += 1;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
            chiffres += 1;
        }
    }
    if chiffres == 0 {
        return f64::NAN;
    }

    // Exposant seulement s’il est complet (au moins un chiffre).
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let debut = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > debut {
            i = j;
        }
    }

    reste[..i]
        .parse::<f64>()
        .map(|v| signe * v)
        .unwrap_or(f64::NAN)
}

fn texte_entree(e: &Entree) -> String {
    match e {
        Entree::Operande(x) => texte_canonique(*x),
        Entree::Operateur(op) => op.symbole.to_string(),
    }
}

/// Ligne "opérations en attente" : entrées séparées par un espace.
pub fn pile_en_texte(pile: &Pile) -> String {
    pile.entrees()
        .map(|e| texte_entree(&e))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ligne de pile en HTML : chaque entrée dans un <span>, vide si pile vide.
pub fn pile_en_html(pile: &Pile) -> String {
    let mut out = String::new();
    for e in pile.entrees() {
        out.push_str("<span>");
        match e {
            Entree::Operande(x) => out.push_str(&texte_canonique(x)),
            Entree::Operateur(op) => out.push_str(op.symbole_html),
        }
        out.push_str("</span>");
    }
    out
}
