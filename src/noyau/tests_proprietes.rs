//! Propriétés de bout en bout (session complète, touche par touche).
//!
//! - précédence à deux niveaux, substitution d’opérateur, "=" enchaînés
//! - retour arrière aux bornes, remise à zéro depuis n’importe quel état
//! - valeurs non finies stockées et affichées sans panique

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::rendu::lire_valeur;
use super::session::{Calculatrice, Journal};

fn session() -> Calculatrice<Journal> {
    Calculatrice::new(Journal::default())
}

fn calcule(touches: &str) -> String {
    let mut calc = session();
    calc.saisir(touches);
    calc.ecran().to_string()
}

/* ------------------------ Précédence ------------------------ */

#[test]
fn prop_multiplication_avant_addition() {
    assert_eq!(calcule("2+3*4="), "14");
}

#[test]
fn prop_chaine_reduite_a_gauche() {
    assert_eq!(calcule("2*3+4="), "10");
    assert_eq!(calcule("10-4-3="), "3");
    assert_eq!(calcule("100/10/5="), "2");
    assert_eq!(calcule("1+2*3*4-5="), "20");
}

#[test]
fn prop_total_visible_en_cours_de_chaine() {
    let mut calc = session();
    calc.saisir("2*3+");
    assert_eq!(calc.ecran(), "6");
    calc.saisir("4*5-");
    assert_eq!(calc.ecran(), "26");
}

/* ------------------------ Substitution ------------------------ */

#[test]
fn prop_dernier_operateur_gagne() {
    assert_eq!(calcule("5+*3="), "15");
    assert_eq!(calcule("5*-/+3="), "8");
}

#[test]
fn prop_substitution_garde_l_ordre_gauche_droite() {
    assert_eq!(calcule("2-3-4="), "-5");
    assert_eq!(calcule("2-3*-4="), "-5");
    assert_eq!(calcule("8/2*/2="), "2");
    assert_eq!(calcule("1+2*+3="), "6");
}

#[test]
fn prop_substitution_plus_forte_differe() {
    // le + remplacé par * attend toujours l’opérande suivant
    assert_eq!(calcule("1+2+*3="), "9");
    assert_eq!(calcule("1-2*3+*4="), "-20");
}

/* ------------------------ "=" enchaînés ------------------------ */

#[test]
fn prop_egal_puis_nouvelle_chaine() {
    let mut calc = session();
    calc.saisir("2+3=");
    assert_eq!(calc.ecran(), "5");
    calc.saisir("+3=");
    assert_eq!(calc.ecran(), "8");
}

#[test]
fn prop_egal_repete_sans_effet() {
    assert_eq!(calcule("2+3==="), "5");
}

/* ------------------------ Immédiats ------------------------ */

#[test]
fn prop_double_negation() {
    let mut calc = session();
    calc.saisir("37");
    calc.saisir("n");
    assert_eq!(calc.ecran(), "-37");
    calc.saisir("n");
    assert_eq!(calc.ecran(), "37");
    assert_eq!(calc.valeur(), 37.0);
}

#[test]
fn prop_negation_sur_saisie_garde_la_paire() {
    let mut calc = session();
    calc.saisir("4*3n");
    assert_eq!(calc.ecran(), "-3");
    assert_eq!(calc.moteur().pile().profondeur(), 1);
    calc.saisir("=");
    assert_eq!(calc.ecran(), "-12");
}

#[test]
fn prop_immediat_dans_une_chaine() {
    assert_eq!(calcule("2+9s="), "5");
    assert_eq!(calcule("3*4r="), "0.75");
    assert_eq!(calcule("1+3q="), "10");
}

/* ------------------------ Retour arrière ------------------------ */

#[test]
fn prop_retour_arriere_bornes() {
    let mut calc = session();
    calc.saisir("7<");
    assert_eq!(calc.ecran(), "0");
    assert!(calc.moteur().registre().est_neuf());

    calc.saisir("<");
    assert_eq!(calc.ecran(), "0");
    assert!(calc.moteur().registre().est_neuf());
}

/* ------------------------ Non finis ------------------------ */

#[test]
fn prop_division_par_zero() {
    let mut calc = session();
    calc.saisir("5/0=");
    assert_eq!(calc.ecran(), "Infinity");
    assert!(calc.valeur().is_infinite());

    // la valeur reste utilisable comme opérande
    calc.saisir("*0=");
    assert_eq!(calc.ecran(), "NaN");
}

#[test]
fn prop_racine_d_un_negatif() {
    let mut calc = session();
    calc.saisir("4n");
    calc.saisir("s");
    assert_eq!(calc.ecran(), "NaN");
}

#[test]
fn prop_grands_resultats_en_exposant() {
    let mut calc = session();
    calc.saisir("10qqqqqqqq");
    assert_eq!(calc.ecran(), "1.0000000000000005e+256");
    assert_eq!(calc.valeur(), lire_valeur(calc.ecran()));

    assert_eq!(calcule("1000000*1000000*1000000*1000="), "1e+21");
    assert_eq!(calcule("1/10000000="), "1e-7");
}

/* ------------------------ Propriétés générées ------------------------ */

fn touche_quelconque() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/', '=', 'r', 'q',
        's', 'n', 'E', '<',
    ])
}

proptest! {
    #[test]
    fn prop_valeur_egale_texte_relu(chiffres in "[0-9]{1,12}(\\.[0-9]{0,8})?") {
        let mut calc = session();
        calc.saisir(&chiffres);

        let attendu: f64 = chiffres.parse().unwrap();
        prop_assert_eq!(calc.valeur(), attendu);
        prop_assert_eq!(lire_valeur(calc.ecran()), attendu);
    }

    #[test]
    fn prop_points_multiples_ignores(chiffres in "[0-9.]{1,16}") {
        let mut calc = session();
        calc.saisir(&chiffres);

        prop_assert!(calc.ecran().matches('.').count() <= 1);
        prop_assert_eq!(calc.valeur(), lire_valeur(calc.ecran()));
    }

    #[test]
    fn prop_remise_a_zero_totale(touches in prop::collection::vec(touche_quelconque(), 0..40)) {
        let mut calc = session();
        let suite: String = touches.into_iter().collect();
        calc.saisir(&suite);
        calc.saisir("C");

        prop_assert_eq!(calc.ecran(), "0");
        prop_assert_eq!(calc.valeur(), 0.0);
        prop_assert!(calc.moteur().registre().est_neuf());
        prop_assert!(calc.moteur().pile().is_empty());
    }

    #[test]
    fn prop_pile_bornee_par_deux_niveaux(touches in prop::collection::vec(touche_quelconque(), 0..60)) {
        let mut calc = session();
        for c in touches {
            calc.saisir(&c.to_string());
            // au plus une addition et une multiplication en attente
            prop_assert!(calc.moteur().pile().profondeur() <= 2);
        }
    }
}
