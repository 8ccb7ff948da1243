//! Noyau de la calculatrice à pile
//!
//! Organisation interne :
//! - operateurs.rs : table statique des opérateurs (arité, précédence, fonction)
//! - registre.rs   : nombre en cours de saisie (texte + valeur + neuf/changé)
//! - pile.rs       : paires (opérande, opérateur) en attente
//! - moteur.rs     : "=", immédiats, différés / réductions par précédence
//! - touches.rs    : touches logiques + table de liaison
//! - rendu.rs      : texte canonique, ligne de pile (texte / HTML)
//! - session.rs    : moteur + adaptateur d’affichage, rendu après chaque touche

pub mod erreur;
pub mod moteur;
pub mod operateurs;
pub mod pile;
pub mod registre;
pub mod rendu;
pub mod session;
pub mod touches;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::ErreurTouche;
pub use operateurs::{Genre, Operateur, IMMEDIATE};
pub use session::{Affichage, Calculatrice, Instantane, Journal};
pub use touches::{liaison, ActionTouche, Touche};
