//! Trait taxonomy: display metadata for the 26 traits
//!
//! The scoring engine only ever uses [`TraitId`]; this module is for the
//! result view and the guide. Lookups by raw string never fail, they fall
//! back to the raw id.

use serde::Serialize;
use crate::types::TraitId;

/// Display metadata for one trait
#[derive(Debug, Clone, Serialize)]
pub struct TraitMeta {
    pub id: TraitId,
    pub name: &'static str,
    pub one_liner: &'static str,
    pub description: &'static str,
    pub relationship: &'static str,
    pub cautions: &'static str,
    pub tags: &'static [&'static str],
}

/// Title and summary for a score row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitDisplay {
    pub title: String,
    pub summary: String,
}

/// All traits, in taxonomy order (same order as [`TraitId::ALL`])
pub static TRAITS: [TraitMeta; crate::TRAIT_COUNT] = [
    TraitMeta {
        id: TraitId::Dominant,
        name: "Dominant",
        one_liner: "Enjoys setting the direction and holding control within agreed limits.",
        description: "Feels most natural designing the flow of an interaction and giving instructions.\nAuthority here is granted by the partner, not taken.",
        relationship: "Takes responsibility for pacing and structure.\nPays attention to how the partner responds to direction.",
        cautions: "Control only exists inside negotiated limits.\nCheck in often; a stop signal always overrides the scene.",
        tags: &["lead", "control", "structure"],
    },
    TraitMeta {
        id: TraitId::Submissive,
        name: "Submissive",
        one_liner: "Finds comfort and satisfaction in handing over direction.",
        description: "Enjoys following instructions and meeting a partner's expectations.\nLetting go of decisions can feel freeing rather than limiting.",
        relationship: "Values clear expectations and reassurance.\nOften thrives with steady feedback.",
        cautions: "Giving up control is a choice that can be taken back at any time.\nKnow your limits and say them out loud.",
        tags: &["follow", "trust", "surrender"],
    },
    TraitMeta {
        id: TraitId::Switch,
        name: "Switch",
        one_liner: "Moves between leading and following depending on partner and mood.",
        description: "Neither role feels fixed.\nEnjoys experiencing both sides and the shift between them.",
        relationship: "Adapts to the partner's energy.\nBenefits from agreeing who leads before starting.",
        cautions: "Make role changes explicit so nobody is caught off guard.",
        tags: &["flexible", "both sides", "adaptive"],
    },
    TraitMeta {
        id: TraitId::Master,
        name: "Master / Mistress",
        one_liner: "Leads through rules, standards and long-term responsibility.",
        description: "Authority is expressed through clear rules and consistent expectations.\nRespect and accountability matter as much as control.",
        relationship: "Often prefers ongoing structured arrangements.\nTakes the wellbeing of the partner seriously.",
        cautions: "Rules should be reviewed together regularly.\nStructure must never replace ongoing consent.",
        tags: &["rules", "authority", "responsibility"],
    },
    TraitMeta {
        id: TraitId::Slave,
        name: "Slave",
        one_liner: "Drawn to deep, structured surrender to a trusted partner.",
        description: "Finds satisfaction in being directed and belonging to someone within a negotiated arrangement.\nOften enjoys giving up many small decisions.",
        relationship: "Looks for consistency and a strong sense of place.\nTrust builds over time.",
        cautions: "Protect your autonomy outside the agreed frame.\nAn arrangement can always be renegotiated or ended.",
        tags: &["devotion", "structure", "belonging"],
    },
    TraitMeta {
        id: TraitId::Owner,
        name: "Owner",
        one_liner: "Sees ownership as a bond of care and commitment.",
        description: "Enjoys a partner belonging to them and the responsibility that comes with it.\nOwnership is about connection more than control.",
        relationship: "Protective and invested.\nOften pairs well with pets or devoted partners.",
        cautions: "Belonging must stay voluntary.\nWatch for possessiveness leaking into everyday life uninvited.",
        tags: &["bond", "care", "commitment"],
    },
    TraitMeta {
        id: TraitId::Pet,
        name: "Pet",
        one_liner: "Enjoys playful, affectionate roles and being looked after.",
        description: "Cuteness, attention and being treated like a cherished pet can be exciting.\nAffection and play are central.",
        relationship: "Thrives on attention and praise.\nOften seeks a caring owner figure.",
        cautions: "Agree on how far the role goes and how to step out of it.",
        tags: &["playful", "affection", "attention"],
    },
    TraitMeta {
        id: TraitId::Little,
        name: "Little",
        one_liner: "Feels safe being cared for in a softer, younger headspace.",
        description: "Being protected and looked after brings comfort.\nThe role is about emotional safety and play.",
        relationship: "Pairs naturally with a caregiver.\nNeeds gentleness and reassurance.",
        cautions: "This is a consensual adult role.\nMake sure the caregiver understands what the headspace needs.",
        tags: &["comfort", "care", "softness"],
    },
    TraitMeta {
        id: TraitId::Caregiver,
        name: "Caregiver",
        one_liner: "Finds meaning in nurturing, protecting and guiding.",
        description: "Enjoys being relied upon and providing comfort.\nGuidance is given with warmth.",
        relationship: "Attentive to the partner's emotional state.\nOften pairs with littles or pets.",
        cautions: "Look after your own needs too.\nCare given should be care wanted.",
        tags: &["nurture", "protect", "warmth"],
    },
    TraitMeta {
        id: TraitId::Brat,
        name: "Brat",
        one_liner: "Pushes back and teases to draw out a firm response.",
        description: "Mischief and playful defiance are a way to ask for attention.\nBeing reined in is part of the fun.",
        relationship: "Needs a partner who enjoys the game.\nBest with a brat tamer.",
        cautions: "Agree on which defiance is play and which is a real no.\nA safeword stays a safeword.",
        tags: &["teasing", "defiance", "mischief"],
    },
    TraitMeta {
        id: TraitId::BratTamer,
        name: "Brat Tamer",
        one_liner: "Enjoys calmly and firmly reining in a playful rebel.",
        description: "Likes a partner who pushes back.\nTaming is a game of patience and wit.",
        relationship: "Pairs naturally with brats.\nEnjoys the back-and-forth more than instant obedience.",
        cautions: "Keep the game playful.\nStop when the resistance stops being play.",
        tags: &["firm", "patient", "playful"],
    },
    TraitMeta {
        id: TraitId::Hunter,
        name: "Hunter",
        one_liner: "Excited by chase, tension and resistance.",
        description: "Chasing and confrontation heighten focus and excitement.\nA resisting partner is more appealing than an easy one.",
        relationship: "Pairs with prey.\nEnjoys intensity and a sense of pursuit.",
        cautions: "Intense scenes need especially clear limits and stop signals.\nPlan the space to be physically safe.",
        tags: &["chase", "tension", "primal"],
    },
    TraitMeta {
        id: TraitId::Prey,
        name: "Prey",
        one_liner: "Enjoys being pursued and overpowered in a controlled setting.",
        description: "The thrill of being chased and caught is exciting.\nResistance is part of the experience.",
        relationship: "Pairs with hunters.\nNeeds trust that the chase stays within limits.",
        cautions: "Use non-verbal stop signals when a scene is loud or physical.",
        tags: &["chase", "thrill", "primal"],
    },
    TraitMeta {
        id: TraitId::Sadist,
        name: "Sadist",
        one_liner: "Enjoys giving intense sensation to a consenting partner.",
        description: "Delivering strong sensation and watching the reaction is thrilling.\nAdjusting intensity in response is part of the skill.",
        relationship: "Pairs with masochists.\nReads the partner closely.",
        cautions: "Learn safe technique first.\nEscalate gradually and agree on aftercare.",
        tags: &["intensity", "sensation", "control"],
    },
    TraitMeta {
        id: TraitId::Masochist,
        name: "Masochist",
        one_liner: "Experiences intense sensation as pleasurable.",
        description: "The line between discomfort and pleasure blurs.\nMarks or lingering sensation can feel positive.",
        relationship: "Pairs with sadists.\nBenefits from a partner who listens carefully.",
        cautions: "Know the difference between good and harmful pain.\nSpeak up early.",
        tags: &["sensation", "endurance", "intensity"],
    },
    TraitMeta {
        id: TraitId::Spanker,
        name: "Spanker",
        one_liner: "Enjoys the rhythm and control of spanking.",
        description: "Sound, rhythm and the partner's reactions are all part of the appeal.\nOften likes a discipline framing.",
        relationship: "Pairs with spankees.\nAdjusts force based on feedback.",
        cautions: "Avoid unsafe areas of the body.\nWarm up and build slowly.",
        tags: &["impact", "rhythm", "discipline"],
    },
    TraitMeta {
        id: TraitId::Spankee,
        name: "Spankee",
        one_liner: "Enjoys receiving spanking and its lingering sensation.",
        description: "Impact and the afterglow that follows are the draw.\nA discipline framing can add to it.",
        relationship: "Pairs with spankers.\nValues aftercare.",
        cautions: "Say what intensity is welcome.\nCheck in on marks afterwards.",
        tags: &["impact", "sensation", "afterglow"],
    },
    TraitMeta {
        id: TraitId::Rigger,
        name: "Rigger",
        one_liner: "Treats tying as craft, art and connection.",
        description: "Enjoys the aesthetics and technique of rope.\nRestraint is a way to connect.",
        relationship: "Pairs with rope bunnies.\nPatient and detail-oriented.",
        cautions: "Learn nerve-safe technique.\nKeep safety shears at hand.",
        tags: &["rope", "craft", "aesthetics"],
    },
    TraitMeta {
        id: TraitId::RopeBunny,
        name: "Rope Bunny",
        one_liner: "Sinks into focus when movement is restricted.",
        description: "Being tied or unable to move deepens immersion.\nThe feeling of being held can be calming or exciting.",
        relationship: "Pairs with riggers.\nNeeds trust in the partner's skill.",
        cautions: "Report numbness or tingling immediately.\nNever be left alone while tied.",
        tags: &["rope", "restraint", "immersion"],
    },
    TraitMeta {
        id: TraitId::Degrader,
        name: "Degrader",
        one_liner: "Uses words and atmosphere to create charged tension.",
        description: "Explicit language and embarrassing setups heighten excitement.\nSeeing the partner flustered is arousing.",
        relationship: "Pairs with degradees.\nNeeds to know which words are welcome.",
        cautions: "Agree on off-limit topics.\nWords can linger, so debrief afterwards.",
        tags: &["verbal", "tension", "embarrassment"],
    },
    TraitMeta {
        id: TraitId::Degradee,
        name: "Degradee",
        one_liner: "Finds embarrassment and humiliation play exciting.",
        description: "Shame or embarrassment within a scene can be a strong stimulus.\nThe framing matters as much as the words.",
        relationship: "Pairs with degraders.\nNeeds reassurance after the scene.",
        cautions: "Separate scene words from real self-worth.\nShare hard limits clearly.",
        tags: &["verbal", "embarrassment", "intensity"],
    },
    TraitMeta {
        id: TraitId::Top,
        name: "Top",
        one_liner: "Prefers to be the one doing the action.",
        description: "Enjoys being active in a scene, whether or not they also hold authority.",
        relationship: "Focuses on delivering the experience.\nPairs with bottoms.",
        cautions: "Doing the action still means listening for feedback.",
        tags: &["active", "giving", "technique"],
    },
    TraitMeta {
        id: TraitId::Bottom,
        name: "Bottom",
        one_liner: "Prefers to be the one receiving the action.",
        description: "Enjoys being on the receiving end of a scene, whether or not they also submit.",
        relationship: "Focuses on experiencing.\nPairs with tops.",
        cautions: "Receiving does not mean silence; feedback shapes the scene.",
        tags: &["receiving", "sensation", "experience"],
    },
    TraitMeta {
        id: TraitId::Servant,
        name: "Servant",
        one_liner: "Finds fulfilment in being useful and attentive.",
        description: "Acts of service and anticipating needs are satisfying.\nPleasure comes from meeting expectations.",
        relationship: "Values appreciation and clear tasks.",
        cautions: "Service should be appreciated, not taken for granted.",
        tags: &["service", "attentive", "devotion"],
    },
    TraitMeta {
        id: TraitId::Vanilla,
        name: "Vanilla",
        one_liner: "Prefers intimacy and romance without strong role play.",
        description: "Emotional connection and tenderness are central.\nStrong setups are not needed for satisfaction.",
        relationship: "Values closeness and warmth.",
        cautions: "Preferences are valid as they are; curiosity is optional.",
        tags: &["romance", "intimacy", "gentle"],
    },
    TraitMeta {
        id: TraitId::Experimentalist,
        name: "Experimentalist",
        one_liner: "Curious to try new things and explore preferences.",
        description: "Novelty and discovery are the draw.\nPreferences are still being mapped.",
        relationship: "Open-minded.\nEnjoys exploring with a communicative partner.",
        cautions: "Research before trying something new.\nStart small.",
        tags: &["curious", "novelty", "explore"],
    },
];

/// Metadata for a trait
pub fn meta(id: TraitId) -> &'static TraitMeta {
    // TRAITS is laid out in TraitId::ALL order
    &TRAITS[id as usize]
}

/// Title and summary for a raw id; unknown ids fall back to the raw id
pub fn display(raw: &str) -> TraitDisplay {
    match TraitId::parse(raw) {
        Some(id) => {
            let t = meta(id);
            TraitDisplay {
                title: t.name.to_string(),
                summary: t.one_liner.to_string(),
            }
        }
        None => TraitDisplay {
            title: raw.to_string(),
            summary: String::new(),
        },
    }
}

/// Case-insensitive search over every text field; blank query returns all
pub fn search(query: &str) -> Vec<&'static TraitMeta> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return TRAITS.iter().collect();
    }

    TRAITS
        .iter()
        .filter(|t| {
            let tags = t.tags.join(" ");
            let hay = [
                t.name,
                t.one_liner,
                tags.as_str(),
                t.description,
                t.relationship,
                t.cautions,
            ]
            .join(" ")
            .to_lowercase();
            hay.contains(&query)
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
