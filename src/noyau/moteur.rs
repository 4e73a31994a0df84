//! Noyau — moteur à touches
//!
//! Machine à états pure : `EtatCalc` + une `Touche` => état suivant.
//! Totale : chaque touche a un successeur défini depuis chaque état,
//! y compris depuis un état d’erreur. Les erreurs sont des DONNÉES
//! (sentinelles affichées), jamais des paniques ni des `Err` qui sortent du moteur.
//!
//! Contrats :
//! - l’entrée n’est jamais vide : "0", un nombre, ou une sentinelle
//! - au plus un séparateur décimal dans l’entrée
//! - un opérateur n’est en attente qu’avec son opérande gauche
//! - l’opérateur reste en attente après "=" : l’expression close "a+b =" n’est plus
//!   un opérande lisible, un nouveau "=" après saisie donne donc "Erreur"
//! - la mémoire survit à C / CE / erreurs

use tracing::{debug, warn};

use super::eval::evaluer;
use super::format::{format_canonique, lire_nombre, vers_affichage, SEPARATEUR_CANONIQUE};
use super::touche::{Memoire, Operateur, Touche};

/* ------------------------ Sentinelles ------------------------ */

/// Valeurs d’erreur affichées à la place d’un résultat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sentinelle {
    /// Évaluation impossible (division par zéro via `=`, dépassement, opérande illisible).
    Erreur,
    /// 1/x sur zéro.
    DivisionParZero,
    /// Racine d’un négatif.
    EntreeInvalide,
}

impl Sentinelle {
    pub fn libelle(self) -> &'static str {
        match self {
            Sentinelle::Erreur => "Erreur",
            Sentinelle::DivisionParZero => "Division par zéro",
            Sentinelle::EntreeInvalide => "Entrée non valide",
        }
    }
}

/* ------------------------ Entrée courante ------------------------ */

#[derive(Clone, Debug, PartialEq)]
enum Entree {
    /// Texte canonique (point décimal) : saisi ou résultat formaté.
    Nombre(String),
    Erreur(Sentinelle),
}

impl Entree {
    fn zero() -> Self {
        Entree::Nombre("0".to_string())
    }

    fn valeur(&self) -> Option<f64> {
        match self {
            Entree::Nombre(s) => lire_nombre(s),
            Entree::Erreur(_) => None,
        }
    }

    fn est_zero_litteral(&self) -> bool {
        matches!(self, Entree::Nombre(s) if s == "0")
    }

    /// Texte canonique, sentinelle comprise (opérande gauche d’une expression).
    fn texte(&self) -> String {
        match self {
            Entree::Nombre(s) => s.clone(),
            Entree::Erreur(s) => s.libelle().to_string(),
        }
    }
}

/* ------------------------ Expression (ligne d’historique) ------------------------ */

#[derive(Clone, Debug, PartialEq)]
enum Expression {
    Vide,
    /// Opérande gauche + opérateur, en attente de l’opérande droit.
    /// Après un enchaînement raté, `gauche` vaut "Erreur" (illisible).
    EnAttente {
        gauche: String,
        operateur: Operateur,
    },
    /// Dernier calcul effectué (affiché suivi de " =").
    Evaluee {
        gauche: String,
        operateur: Operateur,
        droite: String,
    },
}

impl Expression {
    fn texte(&self, conv: impl Fn(&str) -> String) -> String {
        match self {
            Expression::Vide => String::new(),
            Expression::EnAttente { gauche, operateur } => {
                format!("{}{}", conv(gauche), operateur.symbole())
            }
            Expression::Evaluee {
                gauche,
                operateur,
                droite,
            } => format!("{}{}{} =", conv(gauche), operateur.symbole(), conv(droite)),
        }
    }
}

/* ------------------------ Rendu ------------------------ */

/// Ce que l’afficheur reçoit : deux lignes de texte, rien d’autre.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rendu {
    pub courant: String,
    pub historique: String,
}

/* ------------------------ État ------------------------ */

#[derive(Clone, Debug, PartialEq)]
pub struct EtatCalc {
    entree: Entree,
    expression: Expression,
    resultat_final: bool,
    saisie_neuve: bool,
    memoire: f64,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            entree: Entree::zero(),
            expression: Expression::Vide,
            resultat_final: false,
            saisie_neuve: false,
            memoire: 0.0,
        }
    }
}

/// Transition pure : consomme l’état, rend le suivant.
pub fn appliquer(mut etat: EtatCalc, touche: Touche) -> EtatCalc {
    etat.appuyer(touche);
    etat
}

/// Enchaîne plusieurs touches (tests, rejeu).
pub fn appliquer_sequence(etat: EtatCalc, touches: impl IntoIterator<Item = Touche>) -> EtatCalc {
    touches.into_iter().fold(etat, appliquer)
}

impl EtatCalc {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture ------------------------ */

    /// Entrée courante telle qu’affichée (virgule décimale ou sentinelle).
    pub fn entree_courante(&self) -> String {
        match &self.entree {
            Entree::Nombre(s) => vers_affichage(s),
            Entree::Erreur(s) => s.libelle().to_string(),
        }
    }

    /// Ligne d’historique telle qu’affichée ("" si rien).
    pub fn expression_en_attente(&self) -> String {
        self.expression.texte(vers_affichage)
    }

    /// Même ligne, en forme canonique (point décimal).
    pub fn expression_canonique(&self) -> String {
        self.expression.texte(str::to_string)
    }

    pub fn operateur_en_attente(&self) -> Option<Operateur> {
        match self.expression {
            Expression::EnAttente { operateur, .. } | Expression::Evaluee { operateur, .. } => {
                Some(operateur)
            }
            Expression::Vide => None,
        }
    }

    pub fn sentinelle(&self) -> Option<Sentinelle> {
        match self.entree {
            Entree::Erreur(s) => Some(s),
            Entree::Nombre(_) => None,
        }
    }

    pub fn resultat_final(&self) -> bool {
        self.resultat_final
    }

    pub fn saisie_neuve(&self) -> bool {
        self.saisie_neuve
    }

    pub fn memoire(&self) -> f64 {
        self.memoire
    }

    pub fn rendu(&self) -> Rendu {
        Rendu {
            courant: self.entree_courante(),
            historique: self.expression_en_attente(),
        }
    }

    /* ------------------------ Transition ------------------------ */

    /// Applique une touche sur place.
    pub fn appuyer(&mut self, touche: Touche) {
        if !touche.est_valide() {
            warn!(?touche, "touche invalide ignorée");
            return;
        }

        match touche {
            Touche::Memoire(m) => self.memoire_op(m),

            Touche::ToutEffacer => {
                self.entree = Entree::zero();
                self.expression = Expression::Vide;
                self.resultat_final = false;
                self.saisie_neuve = false;
            }

            Touche::EffacerEntree => {
                self.entree = Entree::zero();
                self.saisie_neuve = false;
            }

            Touche::RetourArriere => self.retour_arriere(),

            Touche::Egal => {
                if self.operateur_en_attente().is_some() && !self.resultat_final {
                    self.calculer();
                }
            }

            Touche::Operateur(op) => self.operateur(op),

            Touche::ChangerSigne => {
                if !self.entree.est_zero_litteral() {
                    if let Some(v) = self.entree.valeur() {
                        self.poser_valeur(-v);
                    }
                }
            }

            Touche::Pourcent => {
                if let Some(v) = self.entree.valeur() {
                    self.poser_valeur(v / 100.0);
                }
                self.finaliser();
            }

            Touche::Inverse => match self.entree.valeur() {
                Some(v) if v == 0.0 => self.poser_erreur(Sentinelle::DivisionParZero),
                Some(v) => {
                    self.poser_valeur(1.0 / v);
                    self.finaliser();
                }
                None => {}
            },

            Touche::Carre => {
                if let Some(v) = self.entree.valeur() {
                    self.poser_valeur(v * v);
                }
                self.finaliser();
            }

            Touche::Racine => {
                match self.entree.valeur() {
                    Some(v) if v < 0.0 => self.poser_erreur(Sentinelle::EntreeInvalide),
                    Some(v) => self.poser_valeur(v.sqrt()),
                    None => {}
                }
                self.finaliser();
            }

            Touche::Chiffre(_) | Touche::Separateur => self.saisir(touche),
        }

        debug!(
            touche = touche.valeur(),
            courant = %self.entree_courante(),
            historique = %self.expression_en_attente(),
            "touche appliquée"
        );
    }

    fn memoire_op(&mut self, m: Memoire) {
        match m {
            Memoire::Effacer => self.memoire = 0.0,
            Memoire::Rappeler => {
                self.entree = Entree::Nombre(format_canonique(self.memoire));
                self.resultat_final = true;
            }
            Memoire::Ajouter => {
                if let Some(v) = self.entree.valeur() {
                    self.cumuler_memoire(self.memoire + v);
                }
            }
            Memoire::Soustraire => {
                if let Some(v) = self.entree.valeur() {
                    self.cumuler_memoire(self.memoire - v);
                }
            }
            Memoire::Stocker => {
                if let Some(v) = self.entree.valeur().filter(|v| v.is_finite()) {
                    self.memoire = v;
                }
                self.resultat_final = true;
            }
        }
    }

    /// La mémoire reste finie : un cumul qui déborde est ignoré.
    fn cumuler_memoire(&mut self, m: f64) {
        if m.is_finite() {
            self.memoire = m;
        } else {
            warn!(memoire = self.memoire, "cumul mémoire hors limites ignoré");
        }
    }

    fn retour_arriere(&mut self) {
        let mut texte = match &self.entree {
            Entree::Nombre(s) => s.clone(),
            Entree::Erreur(_) => String::new(),
        };
        texte.pop();

        // "-" et "-0" ne sont pas des saisies : retour à "0"
        self.entree = if texte.is_empty() || texte == "-" || texte == "-0" {
            Entree::zero()
        } else {
            Entree::Nombre(texte)
        };
        self.resultat_final = false;
        self.saisie_neuve = false;
    }

    fn operateur(&mut self, op: Operateur) {
        if matches!(self.entree, Entree::Erreur(_)) {
            self.entree = Entree::zero();
            self.expression = Expression::Vide;
        }

        // Enchaînement : "3 + 4 +" calcule 7 avant de poser le nouveau "+".
        // Si ce calcul échoue, "Erreur" devient l’opérande gauche ("Erreur+").
        if self.operateur_en_attente().is_some() && !self.resultat_final {
            self.calculer();
        }

        self.expression = Expression::EnAttente {
            gauche: self.entree.texte(),
            operateur: op,
        };
        self.saisie_neuve = true;
        self.resultat_final = false;
    }

    fn saisir(&mut self, touche: Touche) {
        let separateur = touche == Touche::Separateur;
        let remplacer = self.resultat_final
            || self.saisie_neuve
            || self.entree.est_zero_litteral()
            || matches!(self.entree, Entree::Erreur(_));

        if remplacer {
            let texte = if separateur {
                format!("0{SEPARATEUR_CANONIQUE}")
            } else {
                touche.valeur().to_string()
            };
            self.entree = Entree::Nombre(texte);
            self.saisie_neuve = false;
        } else if let Entree::Nombre(s) = &mut self.entree {
            if separateur {
                if s.contains(SEPARATEUR_CANONIQUE) {
                    return;
                }
                s.push(SEPARATEUR_CANONIQUE);
            } else {
                s.push_str(touche.valeur());
            }
        }

        self.resultat_final = false;
    }

    /* ------------------------ Calcul + erreurs ------------------------ */

    /// Évalue l’expression en attente avec l’entrée courante comme opérande droit.
    /// Échec (opérande illisible, expression déjà close, résultat non fini) => "Erreur".
    fn calculer(&mut self) {
        let droite = self.entree.texte();

        let calcul = match &self.expression {
            Expression::Vide => return,
            Expression::EnAttente { gauche, operateur } => evaluer(gauche, *operateur, &droite)
                .map(|r| (r, gauche.clone(), *operateur)),
            Expression::Evaluee { .. } => Err(format!(
                "expression déjà évaluée: {:?} suivie de {droite:?}",
                self.expression_canonique()
            )),
        };

        match calcul {
            Ok((r, gauche, operateur)) => {
                self.entree = Entree::Nombre(format_canonique(r));
                self.expression = Expression::Evaluee {
                    gauche,
                    operateur,
                    droite,
                };
                self.finaliser();
            }
            Err(cause) => {
                warn!(%cause, "erreur de calcul");
                self.poser_erreur(Sentinelle::Erreur);
            }
        }
    }

    /// Résultat d’une opération unaire : non fini => erreur générique.
    fn poser_valeur(&mut self, x: f64) {
        if x.is_finite() {
            self.entree = Entree::Nombre(format_canonique(x));
        } else {
            warn!(valeur = x, "résultat non fini");
            self.poser_erreur(Sentinelle::Erreur);
        }
    }

    fn poser_erreur(&mut self, s: Sentinelle) {
        debug!(sentinelle = s.libelle(), "passage en erreur");
        self.entree = Entree::Erreur(s);
        self.expression = Expression::Vide;
        self.finaliser();
    }

    fn finaliser(&mut self) {
        self.resultat_final = true;
        self.saisie_neuve = true;
    }
}
