// src/noyau/pile.rs
//
// Pile d’évaluation
// -----------------
// Vue logique : [opérande, opérateur, opérande, opérateur, ...] (sommet à droite).
// Rangement : une paire (opérande gauche, opérateur en attente) par case,
// donc l’alternance opérande/opérateur tient par construction.

use super::operateurs::Operateur;

/// Entrée de pile, telle que vue par l’affichage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entree {
    Operande(f64),
    Operateur(&'static Operateur),
}

/// Un opérateur binaire en attente et son opérande gauche.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paire {
    pub operande: f64,
    pub operateur: &'static Operateur,
}

#[derive(Clone, Debug, Default)]
pub struct Pile {
    paires: Vec<Paire>,
}

impl Pile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn empiler(&mut self, operande: f64, operateur: &'static Operateur) {
        self.paires.push(Paire {
            operande,
            operateur,
        });
    }

    pub fn depiler(&mut self) -> Option<Paire> {
        self.paires.pop()
    }

    pub fn sommet(&self) -> Option<&Paire> {
        self.paires.last()
    }

    /// Opérateur en attente au sommet (celui que le prochain opérande complétera).
    pub fn operateur_au_sommet(&self) -> Option<&'static Operateur> {
        self.paires.last().map(|p| p.operateur)
    }

    pub fn is_empty(&self) -> bool {
        self.paires.is_empty()
    }

    /// Nombre de paires en attente.
    pub fn profondeur(&self) -> usize {
        self.paires.len()
    }

    pub fn clear(&mut self) {
        self.paires.clear();
    }

    /// Entrées du bas vers le sommet, en alternance.
    pub fn entrees(&self) -> impl Iterator<Item = Entree> + '_ {
        self.paires
            .iter()
            .flat_map(|p| [Entree::Operande(p.operande), Entree::Operateur(p.operateur)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::operateurs::Genre;
    use pretty_assertions::assert_eq;

    #[test]
    fn lifo_et_alternance() {
        let plus = Operateur::de(Genre::Addition);
        let fois = Operateur::de(Genre::Multiplication);

        let mut pile = Pile::new();
        assert!(pile.is_empty());
        assert_eq!(pile.operateur_au_sommet(), None);

        pile.empiler(2.0, plus);
        pile.empiler(3.0, fois);
        assert_eq!(pile.profondeur(), 2);
        assert_eq!(
            pile.entrees().collect::<Vec<_>>(),
            vec![
                Entree::Operande(2.0),
                Entree::Operateur(plus),
                Entree::Operande(3.0),
                Entree::Operateur(fois),
            ]
        );

        let p = pile.depiler().unwrap();
        assert_eq!(p.operande, 3.0);
        assert_eq!(p.operateur.genre, Genre::Multiplication);
        assert_eq!(pile.sommet().map(|p| p.operande), Some(2.0));
    }

    #[test]
    fn depiler_pile_vide() {
        let mut pile = Pile::new();
        assert_eq!(pile.depiler(), None);
        assert_eq!(pile.sommet(), None);

        pile.empiler(5.0, Operateur::de(Genre::Addition));
        pile.clear();
        assert!(pile.is_empty());
        assert_eq!(pile.profondeur(), 0);
    }
}
