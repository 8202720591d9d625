//! Question bank: 10 stage-1 and 65 stage-2 questions
//!
//! Stage 1 maps lightly (one or two traits, weight 1). Stage 2 maps each of
//! questions 1-60 to a primary trait (weight 1.0) and at most one secondary
//! trait (weight 0.5); questions 61-65 are meta questions with no mapping.

use lazy_static::lazy_static;
use crate::types::{Question, Stage, TraitId};
use crate::types::TraitId::*;

const PRIMARY: f64 = 1.0;
const SECONDARY: f64 = 0.5;

lazy_static! {
    static ref STAGE1: Vec<Question> = vec![
        s1("s1-01", "Who takes the lead in a relationship noticeably changes its atmosphere.")
            .with(Dominant, 1.0).with(Submissive, 1.0),
        s1("s1-02", "I am comfortable when roles or positions divide naturally between me and a partner.")
            .with(Dominant, 1.0).with(Submissive, 1.0),
        s1("s1-03", "A slightly unusual relationship dynamic interests me more than the usual one.")
            .with(Switch, 1.0),
        s1("s1-04", "Control, delegation or handing myself over feel like important parts of a relationship.")
            .with(Dominant, 1.0).with(Submissive, 1.0),
        s1("s1-05", "I become more absorbed when there is emotional or psychological tension.")
            .with(Hunter, 1.0),
        s1("s1-06", "I react sensitively to a partner's reactions: attitude, expression, mood.")
            .with(Sadist, 1.0).with(Masochist, 1.0),
        s1("s1-07", "Clear standards or rules in a relationship make me feel more secure.")
            .with(Master, 1.0),
        s1("s1-08", "Equal relationships are good, but other structures can work depending on the situation.")
            .with(Switch, 2.0),
        s1("s1-09", "My tastes and relationship style do not feel entirely average.")
            .with(Brat, 1.0),
        s1("s1-10", "I am interested in a test that helps me learn more about myself.")
            .with(Vanilla, 1.0),
    ];

    static ref STAGE2: Vec<Question> = vec![
        // Ownership / bond 1-5
        s2("s2-01", "Belonging to someone gives me a sense of stability and satisfaction.")
            .with(Owner, PRIMARY),
        s2("s2-02", "I place strong meaning on the 'owner' role of taking responsibility for and caring for a partner.")
            .with(Owner, PRIMARY).with(Dominant, SECONDARY),
        s2("s2-03", "I think ownership in a relationship is a deep bond rather than control.")
            .with(Owner, PRIMARY),
        s2("s2-04", "I feel most satisfied when a partner relies on me and wants to belong to me.")
            .with(Owner, PRIMARY).with(Caregiver, SECONDARY),
        s2("s2-05", "Fully taking charge of, protecting and leading a partner feels rewarding.")
            .with(Owner, PRIMARY).with(Caregiver, SECONDARY),

        // Dominance / lead 6-10
        s2("s2-06", "Designing and leading the flow of a relationship comes naturally to me.")
            .with(Dominant, PRIMARY).with(Top, SECONDARY),
        s2("s2-07", "I get excited when a partner moves within my standards and rules.")
            .with(Dominant, PRIMARY).with(Master, SECONDARY),
        s2("s2-08", "Giving orders or instructions creates sexual tension in itself.")
            .with(Dominant, PRIMARY),
        s2("s2-09", "I want to be a leader with respected authority and responsibility.")
            .with(Master, PRIMARY).with(Dominant, SECONDARY),
        s2("s2-10", "Imagining a situation of complete obedience excites me.")
            .with(Dominant, PRIMARY).with(Master, SECONDARY),

        // Submission / delegation 11-15
        s2("s2-11", "Following someone's instructions feels comfortable.")
            .with(Submissive, PRIMARY).with(Bottom, SECONDARY),
        s2("s2-12", "I feel more satisfied being entrusted to someone than deciding for myself.")
            .with(Slave, PRIMARY).with(Submissive, SECONDARY),
        s2("s2-13", "Acting to meet a partner's expectations gives me sexual pleasure.")
            .with(Submissive, PRIMARY).with(Servant, SECONDARY),
        s2("s2-14", "Scenarios of being owned or controlled are arousing.")
            .with(Slave, PRIMARY),
        s2("s2-15", "Ideas like 'obedience' or 'surrender' fit my tastes well.")
            .with(Submissive, PRIMARY),

        // Hunter / prey 16-20
        s2("s2-16", "The more a partner resists, the more tension and excitement grow.")
            .with(Hunter, PRIMARY),
        s2("s2-17", "A mood of pursuit or confrontation deepens my immersion.")
            .with(Hunter, PRIMARY).with(Prey, SECONDARY),
        s2("s2-18", "A defiant partner attracts me more than one who complies easily.")
            .with(Hunter, PRIMARY).with(Brat, SECONDARY),
        s2("s2-19", "The struggle of a strong back-and-forth is exciting in itself.")
            .with(Hunter, PRIMARY),
        s2("s2-20", "I feel pleasure in scenarios of being overpowered.")
            .with(Prey, PRIMARY),

        // Sadism / masochism 21-25
        s2("s2-21", "Pain or strong stimulation turns into pleasure for me.")
            .with(Masochist, PRIMARY),
        s2("s2-22", "Giving a partner strong stimulation gives me a thrill.")
            .with(Sadist, PRIMARY),
        s2("s2-23", "I see marks left by stimulation (marks, bruises) in a positive light.")
            .with(Masochist, PRIMARY).with(Spankee, SECONDARY),
        s2("s2-24", "I like the feeling of the line between pain and pleasure blurring.")
            .with(Masochist, PRIMARY),
        s2("s2-25", "Adjusting intensity while watching a partner's reactions matters to me.")
            .with(Sadist, PRIMARY),

        // Spanking 26-30
        s2("s2-26", "The sound and rhythm of impact are arousing.")
            .with(Spanker, PRIMARY),
        s2("s2-27", "I am especially drawn to stimulation framed as punishment.")
            .with(Spanker, PRIMARY).with(Spankee, SECONDARY),
        s2("s2-28", "Being struck or striking is sexually arousing.")
            .with(Spankee, PRIMARY).with(Spanker, SECONDARY),
        s2("s2-29", "The lingering sensation after being struck is a point of satisfaction.")
            .with(Spankee, PRIMARY),
        s2("s2-30", "Tuning impact while watching a partner's reactions is fun.")
            .with(Spanker, PRIMARY),

        // Rope / restraint 31-35
        s2("s2-31", "Having my body restricted deepens my immersion.")
            .with(RopeBunny, PRIMARY),
        s2("s2-32", "I find tying or being tied aesthetically pleasing.")
            .with(Rigger, PRIMARY).with(RopeBunny, SECONDARY),
        s2("s2-33", "Excitement rises when I am unable to move.")
            .with(RopeBunny, PRIMARY),
        s2("s2-34", "Restraint is a means of connection, not just restriction.")
            .with(Rigger, PRIMARY).with(Owner, SECONDARY),
        s2("s2-35", "I enjoy thinking about methods and forms of restraint.")
            .with(Rigger, PRIMARY),

        // Degradation 36-40
        s2("s2-36", "Embarrassment or shame becomes a source of excitement.")
            .with(Degradee, PRIMARY),
        s2("s2-37", "Explicit words or staging heighten tension.")
            .with(Degrader, PRIMARY),
        s2("s2-38", "Humiliating scenarios work as stimulation rather than a turn-off.")
            .with(Degradee, PRIMARY).with(Degrader, SECONDARY),
        s2("s2-39", "Seeing a partner flustered is arousing.")
            .with(Degrader, PRIMARY),
        s2("s2-40", "The verbal atmosphere feels like the core of play.")
            .with(Degrader, PRIMARY),

        // Pet / little / care 41-45
        s2("s2-41", "Cuteness or playful charm is sometimes an exciting part of a relationship.")
            .with(Pet, PRIMARY),
        s2("s2-42", "Being protected or cared for increases my sense of security.")
            .with(Little, PRIMARY).with(Caregiver, SECONDARY),
        s2("s2-43", "I am drawn to scenarios of being treated like a pet.")
            .with(Pet, PRIMARY),
        s2("s2-44", "Attention and affection tend to connect with sexual satisfaction for me.")
            .with(Pet, PRIMARY).with(Little, SECONDARY),
        s2("s2-45", "The feeling of wanting to belong to a partner is important.")
            .with(Pet, PRIMARY).with(Owner, SECONDARY),

        // Brat 46-50
        s2("s2-46", "I feel like rebelling or playing pranks on purpose.")
            .with(Brat, PRIMARY),
        s2("s2-47", "I sometimes secretly look forward to being stopped or scolded.")
            .with(Brat, PRIMARY),
        s2("s2-48", "I tend to provoke a partner to draw out a reaction.")
            .with(Brat, PRIMARY).with(Hunter, SECONDARY),
        s2("s2-49", "Mischief sometimes works as a signal that I want attention.")
            .with(Brat, PRIMARY),
        s2("s2-50", "A partner firmly 'taming' me is attractive.")
            .with(Brat, PRIMARY).with(BratTamer, SECONDARY),

        // Switch 51-55
        s2("s2-51", "Leading and submitting change depending on the situation.")
            .with(Switch, PRIMARY),
        s2("s2-52", "Staying fixed in one role is hard for me.")
            .with(Switch, PRIMARY),
        s2("s2-53", "My desires change with the partner or my mood.")
            .with(Switch, PRIMARY),
        s2("s2-54", "I want to experience both roles.")
            .with(Switch, PRIMARY),
        s2("s2-55", "Switching roles feels natural.")
            .with(Switch, PRIMARY),

        // Vanilla 56-60
        s2("s2-56", "I am fully satisfied without any strong setup.")
            .with(Vanilla, PRIMARY),
        s2("s2-57", "Gentle, emotional connection matters more to me.")
            .with(Vanilla, PRIMARY),
        s2("s2-58", "I am more drawn to a romantic atmosphere.")
            .with(Vanilla, PRIMARY),
        s2("s2-59", "I prefer intimacy over intense stimulation.")
            .with(Vanilla, PRIMARY),
        s2("s2-60", "Conventional ways of relating feel comfortable.")
            .with(Vanilla, PRIMARY),

        // Meta 61-65, not scored
        s2("s2-61", "I know my tastes fairly clearly."),
        s2("s2-62", "I have studied or explored these tendencies before."),
        s2("s2-63", "I want to find a partner who suits me."),
        s2("s2-64", "I think play desire and sexual desire can be told apart."),
        s2("s2-65", "I tend to see BDSM as a form of role play."),
    ];
}

fn s1(id: &str, prompt: &str) -> Question {
    Question::new(id, Stage::One, prompt)
}

fn s2(id: &str, prompt: &str) -> Question {
    Question::new(id, Stage::Two, prompt)
}

/// The short exploratory set
pub fn stage1_questions() -> &'static [Question] {
    &STAGE1
}

/// The full scored set
pub fn stage2_questions() -> &'static [Question] {
    &STAGE2
}

/// Questions for a stage
pub fn questions_for(stage: Stage) -> &'static [Question] {
    match stage {
        Stage::One => stage1_questions(),
        Stage::Two => stage2_questions(),
    }
}

/// Look a question up by id across both stages
pub fn find(id: &str) -> Option<&'static Question> {
    stage1_questions()
        .iter()
        .chain(stage2_questions().iter())
        .find(|q| q.id == id)
}

/// Traits no question in the set can move (always 0%)
pub fn unreachable_traits(questions: &[Question]) -> Vec<TraitId> {
    TraitId::ALL
        .iter()
        .copied()
        .filter(|t| {
            !questions
                .iter()
                .any(|q| q.contributions.iter().any(|c| c.trait_id == *t))
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
