//! Tests de scénarios : séquences de touches de bout en bout.
//!
//! Chaque scénario est écrit avec les valeurs des boutons ("7", "+", "MS"...),
//! exactement comme la vue les envoie.

use super::{appliquer_sequence, EtatCalc, Sentinelle, Touche};

fn touches(valeurs: &[&str]) -> Vec<Touche> {
    valeurs
        .iter()
        .map(|v| Touche::depuis_valeur(v).unwrap_or_else(|| panic!("touche inconnue: {v:?}")))
        .collect()
}

fn tape(valeurs: &[&str]) -> EtatCalc {
    appliquer_sequence(EtatCalc::new(), touches(valeurs))
}

fn continue_avec(etat: EtatCalc, valeurs: &[&str]) -> EtatCalc {
    appliquer_sequence(etat, touches(valeurs))
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn scen_saisie_apres_c() {
    let e = tape(&["C", "1", "2", "3"]);
    assert_eq!(e.entree_courante(), "123");
}

#[test]
fn scen_zero_initial_remplace() {
    let e = tape(&["0", "0", "7"]);
    assert_eq!(e.entree_courante(), "7");
}

#[test]
fn scen_second_separateur_ignore() {
    let e = tape(&["1", ",", "2", ","]);
    assert_eq!(e.entree_courante(), "1,2");
}

#[test]
fn scen_chiffre_apres_resultat_repart() {
    let e = tape(&["2", "+", "3", "=", "9"]);
    assert_eq!(e.entree_courante(), "9");
    assert!(!e.resultat_final());
}

/* ------------------------ Calcul ------------------------ */

#[test]
fn scen_enchainement_evalue_tot() {
    let e = tape(&["7", "+", "3", "+"]);
    assert_eq!(e.entree_courante(), "10");
    assert_eq!(e.expression_en_attente(), "10+");

    let e = continue_avec(e, &["5", "="]);
    assert_eq!(e.entree_courante(), "15");
    assert_eq!(e.expression_en_attente(), "10+5 =");
}

#[test]
fn scen_changement_d_operateur_avant_operande() {
    // "7 + *" : l’opérateur en attente est calculé avec l’entrée courante (7+7), puis remplacé.
    let e = tape(&["7", "+", "*"]);
    assert_eq!(e.entree_courante(), "14");
    assert_eq!(e.expression_en_attente(), "14*");
}

#[test]
fn scen_decimaux() {
    let e = tape(&["0", ",", "1", "+", "0", ",", "2", "="]);
    assert_eq!(e.entree_courante(), "0,3");
    assert_eq!(e.expression_en_attente(), "0,1+0,2 =");
}

#[test]
fn scen_division_arrondie() {
    let e = tape(&["1", "0", "/", "3", "="]);
    assert_eq!(e.entree_courante(), "3,3333333333");
}

#[test]
fn scen_egal_idempotent() {
    let une = tape(&["6", "*", "7", "="]);
    assert_eq!(une.entree_courante(), "42");

    let deux = continue_avec(une.clone(), &["="]);
    assert_eq!(deux.entree_courante(), une.entree_courante());
    assert_eq!(deux.expression_en_attente(), une.expression_en_attente());
}

#[test]
fn scen_egal_sans_operateur_sans_effet() {
    let e = tape(&["4", "2", "="]);
    assert_eq!(e.entree_courante(), "42");
    assert_eq!(e.expression_en_attente(), "");
    assert!(!e.resultat_final());
}

#[test]
fn scen_resultat_reutilise_comme_operande() {
    let e = tape(&["2", "+", "3", "=", "*", "4", "="]);
    assert_eq!(e.entree_courante(), "20");
    assert_eq!(e.expression_en_attente(), "5*4 =");
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn scen_division_par_zero() {
    let e = tape(&["5", "/", "0", "="]);
    assert_eq!(e.entree_courante(), "Erreur");
    assert_eq!(e.expression_en_attente(), "");
    assert_eq!(e.sentinelle(), Some(Sentinelle::Erreur));
    assert!(e.resultat_final() && e.saisie_neuve());
}

#[test]
fn scen_inverse_de_zero() {
    let e = tape(&["0", "1/x"]);
    assert_eq!(e.entree_courante(), "Division par zéro");
}

#[test]
fn scen_racine_negative() {
    let e = tape(&["4", "+/-", "sqrt"]);
    assert_eq!(e.entree_courante(), "Entrée non valide");
}

#[test]
fn scen_erreur_efface_l_expression() {
    let e = tape(&["9", "-", "0", "1/x"]);
    assert_eq!(e.entree_courante(), "Division par zéro");
    assert_eq!(e.expression_en_attente(), "");
    assert_eq!(e.operateur_en_attente(), None);
}

#[test]
fn scen_chiffre_apres_erreur_repart() {
    let e = tape(&["5", "/", "0", "=", "8"]);
    assert_eq!(e.entree_courante(), "8");
    assert_eq!(e.sentinelle(), None);
}

#[test]
fn scen_egal_apres_resultat_puis_chiffre() {
    let e = tape(&["7", "+", "3", "=", "5"]);
    assert_eq!(e.entree_courante(), "5");
    assert_eq!(e.expression_en_attente(), "7+3 =");
    assert!(e.operateur_en_attente().is_some());

    let e = continue_avec(e, &["="]);
    assert_eq!(e.sentinelle(), Some(Sentinelle::Erreur));
    assert_eq!(e.expression_en_attente(), "");
}

#[test]
fn scen_enchainement_rate_puis_egal() {
    let e = tape(&["5", "/", "0", "-"]);
    assert_eq!(e.entree_courante(), "Erreur");
    assert_eq!(e.expression_en_attente(), "Erreur-");

    let e = continue_avec(e, &["3"]);
    assert_eq!(e.entree_courante(), "3");

    let e = continue_avec(e, &["="]);
    assert_eq!(e.entree_courante(), "Erreur");
    assert_eq!(e.expression_en_attente(), "");
}

#[test]
fn scen_retour_arriere_sur_moins_zero_virgule() {
    let e = tape(&[",", "5", "+/-", "BACKSPACE", "BACKSPACE", "7"]);
    assert_eq!(e.entree_courante(), "7");
}

/* ------------------------ Mémoire ------------------------ */

#[test]
fn scen_memoire_survit_a_c() {
    let e = tape(&["5", "MS", "C", "MR"]);
    assert_eq!(e.entree_courante(), "5");
}

#[test]
fn scen_memoire_survit_a_une_erreur() {
    let e = tape(&["1", ",", "5", "MS", "0", "1/x", "MR"]);
    assert_eq!(e.entree_courante(), "1,5");
}

#[test]
fn scen_memoire_dans_un_calcul() {
    // MR remplace l’entrée sans toucher à l’expression en attente
    let e = tape(&["3", "M+", "C", "4", "*", "MR"]);
    assert_eq!(e.entree_courante(), "3");
    assert_eq!(e.expression_en_attente(), "4*");
}

/* ------------------------ Unaires ------------------------ */

#[test]
fn scen_pourcent_signe_carre() {
    let e = tape(&["5", "0", "%", "+/-", "x^2"]);
    assert_eq!(e.entree_courante(), "0,25");
}

#[test]
fn scen_unaires_depuis_sentinelles() {
    for depart in [&["5", "/", "0", "="][..], &["0", "1/x"][..], &["4", "+/-", "sqrt"][..]] {
        let e = continue_avec(tape(depart), &["%", "+/-", "x^2"]);
        assert!(e.sentinelle().is_some(), "depart={depart:?}");
    }
}
