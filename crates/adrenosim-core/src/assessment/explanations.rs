//! Educational explanation table
//!
//! Scenario- and drug-specific feedback is data, not logic. Each row names a
//! scenario, the drugs it applies to, the outcome it explains and the messages
//! to emit. Rows are looked up by the assessment rules; anything not covered
//! falls back to the generic template for that outcome.
//!
//! Templates may interpolate:
//!
//! - `{drug}`: the chosen drug's name
//! - `{scenario}`: the scenario's name
//! - `{optimal}`: the scenario's optimal drug id

use super::FeedbackKind::{Danger, Success, Warning};
use super::{Feedback, FeedbackKind};
use crate::drug::Drug;
use crate::scenario::Scenario;

/// Which drugs an entry applies to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrugMatcher {
    /// Any of these drug ids
    Ids(&'static [&'static str]),
    /// Any drug of exactly this class
    Class(&'static str),
}

impl DrugMatcher {
    pub fn matches(&self, drug: &Drug) -> bool {
        match self {
            DrugMatcher::Ids(ids) => ids.contains(&drug.id.as_str()),
            DrugMatcher::Class(class) => drug.class == *class,
        }
    }
}

/// What an entry explains
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Drug is on the scenario's contraindicated list
    Contraindicated,
    /// Drug is the scenario's optimal choice
    Optimal,
    /// Drug is a reasonable but non-optimal choice
    Alternative,
}

/// One feedback line with placeholders
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackTemplate {
    pub kind: FeedbackKind,
    pub text: &'static str,
}

impl FeedbackTemplate {
    pub const fn new(kind: FeedbackKind, text: &'static str) -> Self {
        FeedbackTemplate { kind, text }
    }

    pub fn render(&self, scenario: &Scenario, drug: &Drug) -> Feedback {
        let optimal = scenario.optimal_drug.as_deref().unwrap_or("");
        let message = self
            .text
            .replace("{drug}", &drug.name)
            .replace("{scenario}", &scenario.name)
            .replace("{optimal}", optimal);
        Feedback {
            kind: self.kind,
            message,
        }
    }
}

/// A row of the explanation table
#[derive(Clone, Copy, Debug)]
pub struct ExplanationEntry {
    pub scenario: &'static str,
    pub drug: DrugMatcher,
    pub outcome: Outcome,
    /// Score adjustment; only alternative entries award points
    pub points: i32,
    pub messages: &'static [FeedbackTemplate],
}

impl ExplanationEntry {
    pub fn render(&self, scenario: &Scenario, drug: &Drug) -> Vec<Feedback> {
        self.messages
            .iter()
            .map(|t| t.render(scenario, drug))
            .collect()
    }
}

const fn danger(text: &'static str) -> FeedbackTemplate {
    FeedbackTemplate::new(Danger, text)
}

const fn success(text: &'static str) -> FeedbackTemplate {
    FeedbackTemplate::new(Success, text)
}

const fn warning(text: &'static str) -> FeedbackTemplate {
    FeedbackTemplate::new(Warning, text)
}

pub const GENERIC_CONTRAINDICATION: FeedbackTemplate =
    danger("⚠️ CONTRAINDICATED! {drug} is dangerous in {scenario} and may worsen the patient's condition!");

pub const GENERIC_OPTIMAL: FeedbackTemplate = success("Excellent drug choice for this scenario!");

pub const GENERIC_ALTERNATIVE: FeedbackTemplate = warning("{optimal} may be more effective");

const BETA_BLOCKERS: &[&str] = &["propranolol", "metoprolol", "esmolol"];

/// The closed table of scenario-specific explanations
pub static EXPLANATIONS: &[ExplanationEntry] = &[
    // Contraindications
    ExplanationEntry {
        scenario: "pheochromocytoma",
        drug: DrugMatcher::Ids(BETA_BLOCKERS),
        outcome: Outcome::Contraindicated,
        points: 0,
        messages: &[
            danger("⚠️ CONTRAINDICATED! β-blockade before α-blockade in {scenario}!"),
            danger("Blocking β2-mediated vasodilation leaves circulating catecholamines acting on α1 receptors unopposed → hypertensive crisis and coronary vasoconstriction."),
            warning("Clinical pearl: establish α-blockade first (phentolamine, phenoxybenzamine); add a β-blocker only once α-blockade is complete."),
        ],
    },
    ExplanationEntry {
        scenario: "cocaine_toxicity",
        drug: DrugMatcher::Ids(BETA_BLOCKERS),
        outcome: Outcome::Contraindicated,
        points: 0,
        messages: &[
            danger("⚠️ CONTRAINDICATED! {drug} in {scenario} causes unopposed α-stimulation → severe HTN/coronary vasoconstriction!"),
            danger("Cocaine blocks norepinephrine reuptake. With β2 vasodilation removed, the surplus norepinephrine acts purely on α1 and worsens coronary vasospasm."),
            warning("Clinical pearl: benzodiazepines first for agitation and sympathetic drive, then α-blockade for persistent hypertension."),
        ],
    },
    ExplanationEntry {
        scenario: "anaphylaxis",
        drug: DrugMatcher::Ids(&["propranolol", "metoprolol"]),
        outcome: Outcome::Contraindicated,
        points: 0,
        messages: &[
            danger("⚠️ CONTRAINDICATED! β-blockade worsens {scenario}!"),
            danger("β-blockers remove the β2 bronchodilation and β1 inotropy that epinephrine relies on, making shock and bronchospasm refractory."),
            warning("Clinical pearl: patients already on β-blockers may need glucagon, which raises cAMP independently of β-receptors."),
        ],
    },
    ExplanationEntry {
        scenario: "asthma",
        drug: DrugMatcher::Ids(&["propranolol", "labetalol"]),
        outcome: Outcome::Contraindicated,
        points: 0,
        messages: &[
            danger("⚠️ CONTRAINDICATED! Non-selective β-blockade in {scenario}!"),
            danger("{drug} blocks airway β2 receptors, removing sympathetic bronchodilation and precipitating life-threatening bronchospasm."),
        ],
    },
    ExplanationEntry {
        scenario: "cardiogenic_shock",
        drug: DrugMatcher::Ids(&["propranolol", "metoprolol", "esmolol", "labetalol"]),
        outcome: Outcome::Contraindicated,
        points: 0,
        messages: &[
            danger("⚠️ CONTRAINDICATED! Negative inotropy in {scenario}!"),
            danger("The failing ventricle depends on β1 drive. {drug} lowers contractility and cardiac output further and can precipitate cardiovascular collapse."),
        ],
    },
    ExplanationEntry {
        scenario: "bradycardia",
        drug: DrugMatcher::Class("Central α2-agonist"),
        outcome: Outcome::Contraindicated,
        points: 0,
        messages: &[
            danger("⚠️ CONTRAINDICATED! {drug} reduces sympathetic outflow in {scenario}!"),
            danger("Central α2 agonism lowers heart rate further and can tip a slow escape rhythm into asystole."),
        ],
    },
    ExplanationEntry {
        scenario: "septic_shock",
        drug: DrugMatcher::Ids(&["phentolamine", "labetalol"]),
        outcome: Outcome::Contraindicated,
        points: 0,
        messages: &[
            danger("⚠️ CONTRAINDICATED! α-blockade in distributive shock!"),
            danger("SVR is already pathologically low in {scenario}. {drug} removes the remaining α1 vascular tone and deepens hypotension."),
        ],
    },
    ExplanationEntry {
        scenario: "thyroid_storm",
        drug: DrugMatcher::Ids(&["isoproterenol", "epinephrine"]),
        outcome: Outcome::Contraindicated,
        points: 0,
        messages: &[
            danger("⚠️ CONTRAINDICATED! β-agonism in {scenario}!"),
            danger("Thyroid hormone has already upregulated β-receptors. {drug} amplifies tachycardia and raises the risk of high-output failure and arrhythmia."),
        ],
    },
    // Optimal choices
    ExplanationEntry {
        scenario: "anaphylaxis",
        drug: DrugMatcher::Ids(&["epinephrine"]),
        outcome: Outcome::Optimal,
        points: 0,
        messages: &[
            success("Excellent drug choice for this scenario!"),
            success("Pathophysiology: α1 agonism reverses vasodilation and capillary leak, β1 restores cardiac output, and β2 relaxes bronchial smooth muscle and stabilises mast cells."),
            success("Clinical pearl: give 0.3-0.5 mg IM into the anterolateral thigh; repeat every 5-15 minutes if needed."),
        ],
    },
    ExplanationEntry {
        scenario: "septic_shock",
        drug: DrugMatcher::Ids(&["norepinephrine"]),
        outcome: Outcome::Optimal,
        points: 0,
        messages: &[
            success("Excellent drug choice for this scenario!"),
            success("Pathophysiology: potent α1 agonism restores SVR in distributive shock while modest β1 activity preserves cardiac output."),
            success("Clinical pearl: norepinephrine is the first-line vasopressor in sepsis; target MAP ≥ 65 mmHg and add vasopressin as the second agent."),
        ],
    },
    ExplanationEntry {
        scenario: "cardiogenic_shock",
        drug: DrugMatcher::Ids(&["dobutamine"]),
        outcome: Outcome::Optimal,
        points: 0,
        messages: &[
            success("Excellent drug choice for this scenario!"),
            success("Pathophysiology: β1 agonism increases contractility and stroke volume, while mild β2 vasodilation lowers afterload on the failing ventricle."),
            success("Clinical pearl: watch for hypotension from β2 vasodilation; combine with norepinephrine if MAP falls."),
        ],
    },
    ExplanationEntry {
        scenario: "asthma",
        drug: DrugMatcher::Ids(&["albuterol"]),
        outcome: Outcome::Optimal,
        points: 0,
        messages: &[
            success("Excellent drug choice for this scenario!"),
            success("Pathophysiology: β2 agonism raises cAMP in airway smooth muscle, reversing bronchoconstriction with minimal cardiac stimulation."),
            success("Clinical pearl: nebulised or inhaled delivery keeps systemic levels low; expect mild tachycardia and hypokalaemia."),
        ],
    },
    ExplanationEntry {
        scenario: "bradycardia",
        drug: DrugMatcher::Ids(&["isoproterenol"]),
        outcome: Outcome::Optimal,
        points: 0,
        messages: &[
            success("Excellent drug choice for this scenario!"),
            success("Pathophysiology: pure β1 agonism accelerates the escape pacemaker and increases contractility without raising SVR."),
            success("Clinical pearl: a bridge to transcutaneous or transvenous pacing."),
        ],
    },
    ExplanationEntry {
        scenario: "hypertensive_emergency",
        drug: DrugMatcher::Ids(&["labetalol"]),
        outcome: Outcome::Optimal,
        points: 0,
        messages: &[
            success("Excellent drug choice for this scenario!"),
            success("Pathophysiology: α1 blockade lowers SVR while β blockade prevents reflex tachycardia."),
            success("Clinical pearl: reduce MAP by no more than 25% in the first hour to protect cerebral autoregulation."),
        ],
    },
    ExplanationEntry {
        scenario: "pheochromocytoma",
        drug: DrugMatcher::Ids(&["phentolamine"]),
        outcome: Outcome::Optimal,
        points: 0,
        messages: &[
            success("Excellent drug choice for this scenario!"),
            success("Pathophysiology: competitive α1/α2 blockade directly counters catecholamine-driven vasoconstriction."),
            success("Clinical pearl: expect reflex tachycardia; a β-blocker may follow once α-blockade is established."),
        ],
    },
    ExplanationEntry {
        scenario: "cocaine_toxicity",
        drug: DrugMatcher::Ids(&["phentolamine"]),
        outcome: Outcome::Optimal,
        points: 0,
        messages: &[
            success("Excellent drug choice for this scenario!"),
            success("Pathophysiology: α-blockade reverses cocaine-induced coronary and systemic vasoconstriction without unmasking α stimulation."),
            success("Clinical pearl: pair with a benzodiazepine to reduce central sympathetic outflow."),
        ],
    },
    ExplanationEntry {
        scenario: "thyroid_storm",
        drug: DrugMatcher::Ids(&["propranolol"]),
        outcome: Outcome::Optimal,
        points: 0,
        messages: &[
            success("Excellent drug choice for this scenario!"),
            success("Pathophysiology: non-selective β-blockade controls the hyperadrenergic state and also inhibits peripheral T4 → T3 conversion."),
            success("Clinical pearl: combine with thionamides, iodine (given after the thionamide) and steroids."),
        ],
    },
    // Partial credit
    ExplanationEntry {
        scenario: "septic_shock",
        drug: DrugMatcher::Ids(&["vasopressin"]),
        outcome: Outcome::Alternative,
        points: 10,
        messages: &[
            success("Reasonable choice: V1 agonism restores vascular tone independently of adrenoceptors."),
            warning("Vasopressin is a second-line agent; {optimal} remains first line."),
        ],
    },
    ExplanationEntry {
        scenario: "septic_shock",
        drug: DrugMatcher::Ids(&["phenylephrine"]),
        outcome: Outcome::Alternative,
        points: 10,
        messages: &[
            success("Reasonable choice: α1 agonism raises SVR."),
            warning("Pure α1 agonism adds no β1 support and may lower cardiac output; {optimal} may be more effective."),
        ],
    },
    ExplanationEntry {
        scenario: "septic_shock",
        drug: DrugMatcher::Ids(&["epinephrine"]),
        outcome: Outcome::Alternative,
        points: 10,
        messages: &[
            success("Reasonable choice: epinephrine is an accepted second vasopressor in sepsis."),
            warning("Strong β2 activity raises lactate and tachyarrhythmia risk; {optimal} may be more effective."),
        ],
    },
    ExplanationEntry {
        scenario: "septic_shock",
        drug: DrugMatcher::Ids(&["dopamine"]),
        outcome: Outcome::Alternative,
        points: 5,
        messages: &[
            warning("Dopamine raises MAP but causes more arrhythmias than {optimal} in septic shock."),
        ],
    },
    ExplanationEntry {
        scenario: "cardiogenic_shock",
        drug: DrugMatcher::Ids(&["milrinone"]),
        outcome: Outcome::Alternative,
        points: 15,
        messages: &[
            success("Reasonable choice: PDE3 inhibition raises cAMP and inotropy without β-receptors."),
            warning("Milrinone vasodilates and accumulates in renal failure; {optimal} may be more effective as a first inotrope."),
        ],
    },
    ExplanationEntry {
        scenario: "cardiogenic_shock",
        drug: DrugMatcher::Ids(&["norepinephrine"]),
        outcome: Outcome::Alternative,
        points: 10,
        messages: &[
            success("Reasonable choice when MAP is critically low."),
            warning("Raising SVR increases afterload on a failing ventricle; an inotrope such as {optimal} is still needed."),
        ],
    },
    ExplanationEntry {
        scenario: "asthma",
        drug: DrugMatcher::Ids(&["epinephrine"]),
        outcome: Outcome::Alternative,
        points: 10,
        messages: &[
            success("Reasonable choice in life-threatening bronchospasm: β2 agonism bronchodilates."),
            warning("Non-selective stimulation raises heart rate and BP; inhaled {optimal} is preferred."),
        ],
    },
    ExplanationEntry {
        scenario: "asthma",
        drug: DrugMatcher::Ids(&["isoproterenol"]),
        outcome: Outcome::Alternative,
        points: 5,
        messages: &[
            warning("β2 agonism helps, but strong β1 activity causes marked tachycardia; {optimal} may be more effective."),
        ],
    },
    ExplanationEntry {
        scenario: "bradycardia",
        drug: DrugMatcher::Ids(&["dopamine"]),
        outcome: Outcome::Alternative,
        points: 15,
        messages: &[
            success("Reasonable choice: dopamine is a guideline option for atropine-refractory bradycardia."),
            warning("α1 effects at higher doses raise afterload; {optimal} is a purer chronotrope."),
        ],
    },
    ExplanationEntry {
        scenario: "bradycardia",
        drug: DrugMatcher::Ids(&["epinephrine"]),
        outcome: Outcome::Alternative,
        points: 10,
        messages: &[
            success("Reasonable choice: epinephrine infusion is a guideline option for symptomatic bradycardia."),
            warning("Non-selective stimulation increases myocardial oxygen demand; {optimal} may be more effective."),
        ],
    },
    ExplanationEntry {
        scenario: "hypertensive_emergency",
        drug: DrugMatcher::Ids(&["esmolol"]),
        outcome: Outcome::Alternative,
        points: 10,
        messages: &[
            success("Reasonable choice: titratable β1 blockade lowers heart rate and cardiac output."),
            warning("Without α-blockade SVR stays high; {optimal} addresses both."),
        ],
    },
    ExplanationEntry {
        scenario: "hypertensive_emergency",
        drug: DrugMatcher::Ids(&["clonidine"]),
        outcome: Outcome::Alternative,
        points: 10,
        messages: &[
            success("Reasonable choice: central α2 agonism reduces sympathetic outflow."),
            warning("Onset is slow and rebound hypertension is common; {optimal} may be more effective."),
        ],
    },
    ExplanationEntry {
        scenario: "hypertensive_emergency",
        drug: DrugMatcher::Ids(&["phentolamine"]),
        outcome: Outcome::Alternative,
        points: 5,
        messages: &[
            warning("α-blockade lowers SVR but causes reflex tachycardia; {optimal} may be more effective."),
        ],
    },
    ExplanationEntry {
        scenario: "pheochromocytoma",
        drug: DrugMatcher::Ids(&["prazosin"]),
        outcome: Outcome::Alternative,
        points: 10,
        messages: &[
            success("Reasonable choice: selective α1 blockade is used for pre-operative preparation."),
            warning("Oral onset is too slow for a crisis; IV {optimal} may be more effective."),
        ],
    },
    ExplanationEntry {
        scenario: "pheochromocytoma",
        drug: DrugMatcher::Class("Combined α/β-blocker"),
        outcome: Outcome::Alternative,
        points: 5,
        messages: &[
            warning("{drug} is far more β- than α-selective and can still cause paradoxical hypertension; {optimal} may be more effective."),
        ],
    },
    ExplanationEntry {
        scenario: "cocaine_toxicity",
        drug: DrugMatcher::Ids(&["labetalol"]),
        outcome: Outcome::Alternative,
        points: 10,
        messages: &[
            success("Reasonable choice: combined blockade lowers BP and heart rate."),
            warning("{drug}'s α-blockade is weak relative to its β-blockade; {optimal} may be more effective."),
        ],
    },
    ExplanationEntry {
        scenario: "cocaine_toxicity",
        drug: DrugMatcher::Ids(&["prazosin"]),
        outcome: Outcome::Alternative,
        points: 10,
        messages: &[
            success("Reasonable choice: α1 blockade counters vasoconstriction."),
            warning("Oral onset is slow in an emergency; {optimal} may be more effective."),
        ],
    },
    ExplanationEntry {
        scenario: "thyroid_storm",
        drug: DrugMatcher::Ids(&["esmolol"]),
        outcome: Outcome::Alternative,
        points: 15,
        messages: &[
            success("Reasonable choice: titratable β1 blockade controls the heart rate."),
            warning("Esmolol does not inhibit T4 → T3 conversion; {optimal} may be more effective."),
        ],
    },
    ExplanationEntry {
        scenario: "thyroid_storm",
        drug: DrugMatcher::Ids(&["metoprolol"]),
        outcome: Outcome::Alternative,
        points: 10,
        messages: &[
            success("Reasonable choice: β1 blockade controls the heart rate."),
            warning("Selective β1 blockade leaves tremor and anxiety untreated; {optimal} may be more effective."),
        ],
    },
];

/// Find the table entry for a scenario, drug and outcome.
///
/// Id matches take precedence over class matches.
pub fn lookup(
    scenario_id: &str,
    drug: &Drug,
    outcome: Outcome,
) -> Option<&'static ExplanationEntry> {
    let mut candidates = EXPLANATIONS
        .iter()
        .filter(|e| e.scenario == scenario_id && e.outcome == outcome && e.drug.matches(drug));

    let first = candidates.next()?;
    if matches!(first.drug, DrugMatcher::Ids(_)) {
        return Some(first);
    }
    Some(
        candidates
            .find(|e| matches!(e.drug, DrugMatcher::Ids(_)))
            .unwrap_or(first),
    )
}
