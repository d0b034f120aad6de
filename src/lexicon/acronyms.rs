//! Acronym substitution tables.
//!
//! Each supported language carries a static, ordered list of
//! (abbreviation, expansion) pairs. Order matters: rules are applied
//! sequentially over a shared text buffer, so later rules see text
//! already rewritten by earlier ones. The table order is a designed
//! tie-break and must be preserved exactly.

use regex::Regex;

use crate::error::ConfigurationError;
use crate::types::Language;

/// Static English acronym table (domain: biomedical corpora).
pub const EN_ACRONYMS: &[(&str, &str)] = &[
    ("MRI", "magnetic resonance image"),
    ("CT", "computed tomography"),
    ("PET", "positron emission tomography"),
    ("SPECT", "single photon emission computed tomography"),
    ("US", "ultrasound"),
    ("ALS", "amyotrophic lateral sclerosis"),
    ("ECG", "electrocardiogram"),
    ("EKG", "electrocardiogram"),
    ("EEG", "electroencephalogram"),
    ("EMG", "electromyogram"),
    ("HR", "heart rate"),
    ("ABX", "antibiotics"),
    ("AF", "atrial fibrillation"),
    ("XR", "x ray"),
    ("BLS", "basic life support"),
    ("BMD", "bone mass density"),
    ("BMI", "body mass index"),
    ("BP", "blood pressure"),
    ("Bx", "biopsy"),
    ("CAD", "coronary artery disease"),
    ("CAT", "computed axial tomography"),
    ("CBF", "cerebral blood flow"),
    ("CO2", "carbon dioxide"),
    ("O2", "oxygen"),
    ("H2O", "water"),
    ("CV", "cardiovascular"),
    ("DNA", "deoxyribonucleic acid"),
    ("RNA", "ribonucleic acid"),
    ("Dx", "diagnosis"),
    ("EOC", "emergency operations center"),
    ("FX", "fracture"),
    ("GI", "gastrointestinal"),
    ("GP", "general practitioner"),
    ("ICU", "intensive care unit"),
    ("IQ", "intelligence quotient"),
    ("IT", "information technology"),
    ("IV", "intravenous"),
    ("LOF", "loss of fluid"),
    ("LTC", "long term care"),
    ("LV", "left ventricle"),
    ("RV", "right ventricle"),
    ("MG", "milligram"),
    ("ML", "milliliter"),
    ("NIH", "national institutes of health"),
    ("NM", "neuromuscular"),
    ("OCD", "obsessive compulsive disorder"),
    ("OT", "occupational therapy"),
    ("PHS", "public health service"),
    ("PPE", "personal protective equipment"),
    ("QA", "quality assurance"),
    ("QI", "quality improvement"),
    ("RF", "risk factor"),
    ("Rx", "treatment"),
    ("SSA", "social security administration"),
    ("TB", "tuberculosis"),
    ("TLC", "total lung capacity"),
    ("VF", "ventricular fibrillation"),
    ("WHO", "world health organization"),
];

/// Static Spanish acronym table.
pub const ES_ACRONYMS: &[(&str, &str)] = &[
    ("RMN", "resonancia magnetica nuclear"),
    ("TAC", "tomografia axial computarizada"),
    ("ECG", "electrocardiograma"),
    ("EEG", "electroencefalograma"),
    ("UCI", "unidad de cuidados intensivos"),
    ("ADN", "acido desoxirribonucleico"),
    ("ARN", "acido ribonucleico"),
    ("IMC", "indice de masa corporal"),
    ("ONU", "organizacion de las naciones unidas"),
    ("OMS", "organizacion mundial de la salud"),
];

/// A single compiled substitution rule: a case-insensitive whole-word
/// pattern and its replacement text.
#[derive(Debug, Clone)]
pub struct AcronymRule {
    pattern: Regex,
    expansion: String,
}

impl AcronymRule {
    /// Compile a rule from an acronym and its expansion.
    ///
    /// The acronym is escaped and anchored on word boundaries; matching is
    /// case-insensitive.
    pub fn new(acronym: &str, expansion: &str) -> Result<Self, ConfigurationError> {
        let raw = format!(r"(?i)\b{}\b", regex::escape(acronym));
        let pattern = Regex::new(&raw).map_err(|source| ConfigurationError::AcronymPattern {
            pattern: raw,
            source,
        })?;
        Ok(Self {
            pattern,
            expansion: expansion.to_string(),
        })
    }

    /// Replace every match of this rule in `text`.
    pub fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.expansion.as_str()).into_owned()
    }

    /// The replacement text for this rule.
    pub fn expansion(&self) -> &str {
        &self.expansion
    }
}

/// An ordered, immutable table of [`AcronymRule`]s for one language.
#[derive(Debug, Clone)]
pub struct AcronymTable {
    rules: Vec<AcronymRule>,
}

impl AcronymTable {
    /// Build the built-in table for `language`.
    pub fn for_language(language: Language) -> Result<Self, ConfigurationError> {
        let entries = match language {
            Language::English => EN_ACRONYMS,
            Language::Spanish => ES_ACRONYMS,
        };
        Self::from_entries(entries)
    }

    /// Build a table from raw (acronym, expansion) pairs, preserving order.
    pub fn from_entries(entries: &[(&str, &str)]) -> Result<Self, ConfigurationError> {
        let rules = entries
            .iter()
            .map(|(acr, exp)| AcronymRule::new(acr, exp))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Apply every rule in table order as a pure fold over the text.
    pub fn expand(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, rule| rule.apply(&acc))
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
