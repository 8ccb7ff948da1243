// src/noyau/touches.rs
//
// Touches logiques
// ----------------
// Une touche physique (nom de touche clavier, libellé de bouton) se lie,
// par une table statique, à l’une de ces actions :
// - Chiffre   => Registre::push
// - Operateur => Moteur::operer
// - Action    => remises à zéro / retour arrière

use std::str::FromStr;

use super::erreur::ErreurTouche;
use super::operateurs::Genre;

/// Actions de remise à zéro.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionTouche {
    /// C : tout remettre à zéro (registre + pile).
    ToutEffacer,
    /// CE : effacer seulement le nombre en cours.
    EffacerEntree,
    /// DEL : effacer le dernier chiffre.
    Retour,
}

impl ActionTouche {
    /// Codes numériques historiques des touches d’action.
    pub const CODE_C: u8 = 9;
    pub const CODE_CE: u8 = 10;
    pub const CODE_BSP: u8 = 11;

    pub fn depuis_code(code: u8) -> Result<Self, ErreurTouche> {
        match code {
            Self::CODE_C => Ok(Self::ToutEffacer),
            Self::CODE_CE => Ok(Self::EffacerEntree),
            Self::CODE_BSP => Ok(Self::Retour),
            _ => Err(ErreurTouche::ActionInconnue(code)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// '0'..='9' ou '.'
    Chiffre(char),
    Operateur(Genre),
    Action(ActionTouche),
}

/// Table de liaison : nom de touche -> touche logique.
///
/// Noms reconnus : chiffres, "." et "," (point décimal), "+ - * /",
/// "Enter" et "=", "Backspace", "Escape" (CE), "Delete" (C).
pub fn liaison(nom: &str) -> Option<Touche> {
    let t = match nom {
        "." | "," => Touche::Chiffre('.'),
        "+" => Touche::Operateur(Genre::Addition),
        "-" => Touche::Operateur(Genre::Soustraction),
        "*" => Touche::Operateur(Genre::Multiplication),
        "/" => Touche::Operateur(Genre::Division),
        "Enter" | "=" => Touche::Operateur(Genre::Egal),
        "Backspace" => Touche::Action(ActionTouche::Retour),
        "Escape" => Touche::Action(ActionTouche::EffacerEntree),
        "Delete" => Touche::Action(ActionTouche::ToutEffacer),
        _ => {
            let mut it = nom.chars();
            match (it.next(), it.next()) {
                (Some(c), None) if c.is_ascii_digit() => Touche::Chiffre(c),
                _ => return None,
            }
        }
    };
    Some(t)
}

impl FromStr for Touche {
    type Err = ErreurTouche;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        liaison(s).ok_or_else(|| ErreurTouche::ToucheInconnue(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn chiffres_et_separateurs() {
        for c in '0'..='9' {
            assert_eq!(liaison(&c.to_string()), Some(Touche::Chiffre(c)));
        }
        assert_eq!(liaison("."), Some(Touche::Chiffre('.')));
        assert_eq!(liaison(","), Some(Touche::Chiffre('.')));
        assert_eq!(liaison("12"), None);
    }

    #[test]
    fn operateurs_et_actions() {
        assert_eq!(liaison("*"), Some(Touche::Operateur(Genre::Multiplication)));
        assert_eq!(liaison("Enter"), Some(Touche::Operateur(Genre::Egal)));
        assert_eq!(
            liaison("Backspace"),
            Some(Touche::Action(ActionTouche::Retour))
        );
        assert_eq!(
            liaison("Escape"),
            Some(Touche::Action(ActionTouche::EffacerEntree))
        );
    }

    #[test]
    fn touche_inconnue() {
        let err = "F5".parse::<Touche>().unwrap_err();
        assert_eq!(err, ErreurTouche::ToucheInconnue("F5".into()));
        assert_eq!(err.to_string(), "touche inconnue: \"F5\"");
    }

    #[test]
    fn codes_d_action() {
        assert_eq!(
            ActionTouche::depuis_code(ActionTouche::CODE_C),
            Ok(ActionTouche::ToutEffacer)
        );
        assert_eq!(
            ActionTouche::depuis_code(ActionTouche::CODE_CE),
            Ok(ActionTouche::EffacerEntree)
        );
        assert_eq!(
            ActionTouche::depuis_code(ActionTouche::CODE_BSP),
            Ok(ActionTouche::Retour)
        );
        assert_eq!(
            ActionTouche::depuis_code(42),
            Err(ErreurTouche::ActionInconnue(42))
        );
    }
}
