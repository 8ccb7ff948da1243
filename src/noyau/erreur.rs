// src/noyau/erreur.rs
//
// Diagnostics de saisie. Le calcul lui-même n’échoue jamais :
// division par zéro, √ d’un négatif => valeur non finie affichée telle quelle.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurTouche {
    #[error("touche inconnue: {0:?}")]
    ToucheInconnue(String),

    #[error("code d’action inconnu: {0}")]
    ActionInconnue(u8),
}
