// Domain types for the analysis results, plus the hardcoded demo data that
// stands in for a real analysis service.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillCategory {
    Technical,
    Soft,
    Domain,
}

impl SkillCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "technical",
            SkillCategory::Soft => "soft",
            SkillCategory::Domain => "domain",
        }
    }
}

/// One labeled score. Immutable input to the renderers; only the displayed
/// value is animated.
#[derive(Clone, Debug)]
pub struct Skill {
    pub name: &'static str,
    /// 0..=100
    pub score: u8,
    pub category: SkillCategory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsightKind {
    Gap,
    Strength,
    Growth,
    Recommendation,
}

impl InsightKind {
    pub fn label(&self) -> &'static str {
        match self {
            InsightKind::Gap => "gap",
            InsightKind::Strength => "strength",
            InsightKind::Growth => "growth",
            InsightKind::Recommendation => "recommendation",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug)]
pub struct Readiness {
    pub level: &'static str,
    /// 0..=100
    pub percentage: u8,
}

/// The ordered skill list; order defines the radar chart's axis order.
pub fn demo_skills() -> Vec<Skill> {
    use SkillCategory::*;
    vec![
        Skill { name: "JavaScript", score: 78, category: Technical },
        Skill { name: "System Design", score: 65, category: Technical },
        Skill { name: "DSA", score: 58, category: Technical },
        Skill { name: "Communication", score: 70, category: Soft },
        Skill { name: "Problem Solving", score: 82, category: Soft },
        Skill { name: "API Design", score: 72, category: Technical },
        Skill { name: "Testing", score: 55, category: Technical },
        Skill { name: "Documentation", score: 68, category: Soft },
    ]
}

pub fn demo_readiness() -> Readiness {
    Readiness {
        level: "Mid-Senior Level",
        percentage: 72,
    }
}

pub fn demo_insights() -> Vec<Insight> {
    use InsightKind::*;
    vec![
        Insight {
            kind: Gap,
            title: "Strong logic in JS, but weak async handling patterns",
            description: "Consider deepening knowledge of Promises, async/await, and event loop mechanics.",
        },
        Insight {
            kind: Gap,
            title: "DSA recursion explanations lacked edge case coverage",
            description: "Practice explaining base cases and termination conditions more explicitly.",
        },
        Insight {
            kind: Strength,
            title: "Exceptional problem decomposition abilities",
            description: "Your systematic approach to breaking down complex problems is above industry average.",
        },
        Insight {
            kind: Growth,
            title: "System design knowledge shows strong foundation",
            description: "With focused practice on distributed systems, you could reach senior-level proficiency.",
        },
        Insight {
            kind: Recommendation,
            title: "Focus on real-world async patterns",
            description: "Build a project involving complex async flows like real-time data or background jobs.",
        },
    ]
}
