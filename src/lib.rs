//! Calculatrice à pile — noyau embarquable.
//!
//! Automate pur piloté par touches : aucun rendu ici, seulement un appel
//! `Affichage::rendre` après chaque touche traitée.

pub mod noyau;
