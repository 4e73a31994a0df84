// src/noyau/touche.rs
//
// Vocabulaire des touches
// -----------------------
// Une touche = une action discrète (bouton ou raccourci clavier).
// Le moteur ne voit QUE ce vocabulaire : la vue et l’adaptateur clavier
// traduisent les événements de la plateforme en `Touche`.

/// Opérateur binaire (un seul en attente à la fois).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            _ => None,
        }
    }

    /// Arithmétique IEEE brute (pas d’arrondi, pas de contrôle de finitude).
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            Operateur::Divise => a / b,
        }
    }
}

/// Opérations sur le registre mémoire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Memoire {
    /// MC
    Effacer,
    /// MR
    Rappeler,
    /// M+
    Ajouter,
    /// M-
    Soustraire,
    /// MS
    Stocker,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// 0..=9
    Chiffre(u8),
    /// Séparateur décimal (`,` à l’affichage)
    Separateur,
    Operateur(Operateur),
    Egal,
    /// C
    ToutEffacer,
    /// CE
    EffacerEntree,
    RetourArriere,
    /// +/-
    ChangerSigne,
    Pourcent,
    /// 1/x
    Inverse,
    /// x^2
    Carre,
    /// sqrt
    Racine,
    Memoire(Memoire),
}

const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Valeur d’un `Chiffre(d)` avec d > 9 (jamais saisie, seulement journalisée).
const CHIFFRE_INVALIDE: &str = "?";

impl Touche {
    /// Vocabulaire complet (tests exhaustifs / fuzz).
    pub const TOUTES: [Touche; 29] = [
        Touche::Chiffre(0),
        Touche::Chiffre(1),
        Touche::Chiffre(2),
        Touche::Chiffre(3),
        Touche::Chiffre(4),
        Touche::Chiffre(5),
        Touche::Chiffre(6),
        Touche::Chiffre(7),
        Touche::Chiffre(8),
        Touche::Chiffre(9),
        Touche::Separateur,
        Touche::Operateur(Operateur::Plus),
        Touche::Operateur(Operateur::Moins),
        Touche::Operateur(Operateur::Fois),
        Touche::Operateur(Operateur::Divise),
        Touche::Egal,
        Touche::ToutEffacer,
        Touche::EffacerEntree,
        Touche::RetourArriere,
        Touche::ChangerSigne,
        Touche::Pourcent,
        Touche::Inverse,
        Touche::Carre,
        Touche::Racine,
        Touche::Memoire(Memoire::Effacer),
        Touche::Memoire(Memoire::Rappeler),
        Touche::Memoire(Memoire::Ajouter),
        Touche::Memoire(Memoire::Soustraire),
        Touche::Memoire(Memoire::Stocker),
    ];

    /// `Chiffre(d)` n’a de sens que pour d <= 9 ; le moteur ignore le reste.
    pub fn est_valide(self) -> bool {
        !matches!(self, Touche::Chiffre(d) if d > 9)
    }

    /// Valeur textuelle d’un bouton ("7", ",", "1/x", "M+", ...).
    /// Inverse exact de `depuis_valeur` pour toute touche valide.
    pub fn valeur(self) -> &'static str {
        match self {
            Touche::Chiffre(d) => CHIFFRES
                .get(usize::from(d))
                .copied()
                .unwrap_or(CHIFFRE_INVALIDE),
            Touche::Separateur => ",",
            Touche::Operateur(Operateur::Plus) => "+",
            Touche::Operateur(Operateur::Moins) => "-",
            Touche::Operateur(Operateur::Fois) => "*",
            Touche::Operateur(Operateur::Divise) => "/",
            Touche::Egal => "=",
            Touche::ToutEffacer => "C",
            Touche::EffacerEntree => "CE",
            Touche::RetourArriere => "BACKSPACE",
            Touche::ChangerSigne => "+/-",
            Touche::Pourcent => "%",
            Touche::Inverse => "1/x",
            Touche::Carre => "x^2",
            Touche::Racine => "sqrt",
            Touche::Memoire(Memoire::Effacer) => "MC",
            Touche::Memoire(Memoire::Rappeler) => "MR",
            Touche::Memoire(Memoire::Ajouter) => "M+",
            Touche::Memoire(Memoire::Soustraire) => "M-",
            Touche::Memoire(Memoire::Stocker) => "MS",
        }
    }

    /// Parse la valeur d’un bouton. Valeur inconnue => None.
    pub fn depuis_valeur(v: &str) -> Option<Touche> {
        let t = match v {
            "," => Touche::Separateur,
            "=" => Touche::Egal,
            "C" => Touche::ToutEffacer,
            "CE" => Touche::EffacerEntree,
            "BACKSPACE" => Touche::RetourArriere,
            "+/-" => Touche::ChangerSigne,
            "%" => Touche::Pourcent,
            "1/x" => Touche::Inverse,
            "x^2" => Touche::Carre,
            "sqrt" => Touche::Racine,
            "MC" => Touche::Memoire(Memoire::Effacer),
            "MR" => Touche::Memoire(Memoire::Rappeler),
            "M+" => Touche::Memoire(Memoire::Ajouter),
            "M-" => Touche::Memoire(Memoire::Soustraire),
            "MS" => Touche::Memoire(Memoire::Stocker),
            _ => return Self::chiffre_ou_operateur(v),
        };
        Some(t)
    }

    /// Raccourcis clavier (noms de touches façon navigateur).
    ///
    /// - chiffres -> chiffre ; `,` et `.` -> séparateur
    /// - `+ - * /` -> opérateur
    /// - Enter -> `=` ; Backspace -> retour arrière ; Escape -> C
    pub fn depuis_clavier(cle: &str) -> Option<Touche> {
        match cle {
            "," | "." => Some(Touche::Separateur),
            "Enter" => Some(Touche::Egal),
            "Backspace" => Some(Touche::RetourArriere),
            "Escape" => Some(Touche::ToutEffacer),
            _ => Self::chiffre_ou_operateur(cle),
        }
    }

    fn chiffre_ou_operateur(s: &str) -> Option<Touche> {
        let mut chars = s.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        if let Some(d) = c.to_digit(10) {
            return u8::try_from(d).ok().map(Touche::Chiffre);
        }
        Operateur::depuis_symbole(c).map(Touche::Operateur)
    }
}
