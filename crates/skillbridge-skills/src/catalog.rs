use crate::skill::{FunctionDeclaration, SkillDescriptor};
use tracing::{debug, warn};

/// Project descriptors into function declarations, preserving order.
pub fn to_function_declarations(descriptors: &[SkillDescriptor]) -> Vec<FunctionDeclaration> {
    descriptors.iter().map(FunctionDeclaration::from).collect()
}

/// Find a descriptor by exact, case-sensitive name.
///
/// With duplicate names the first entry wins.
pub fn resolve<'a>(descriptors: &'a [SkillDescriptor], name: &str) -> Option<&'a SkillDescriptor> {
    descriptors.iter().find(|d| d.name == name)
}

/// Immutable snapshot of the skills advertised by the task server.
///
/// Captured once at session start and shared read-only with the orchestrator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillCatalog {
    skills: Vec<SkillDescriptor>,
}

impl SkillCatalog {
    pub fn new(skills: Vec<SkillDescriptor>) -> Self {
        for (i, skill) in skills.iter().enumerate() {
            if skills[..i].iter().any(|s| s.name == skill.name) {
                warn!(skill = %skill.name, "Duplicate skill name in catalog; first entry wins");
            }
        }
        debug!(count = skills.len(), "Skill catalog snapshot created");
        Self { skills }
    }

    /// A catalog with no skills. The conversation still works, without tools.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn skills(&self) -> &[SkillDescriptor] {
        &self.skills
    }

    pub fn declarations(&self) -> Vec<FunctionDeclaration> {
        to_function_declarations(&self.skills)
    }

    pub fn resolve(&self, name: &str) -> Option<&SkillDescriptor> {
        resolve(&self.skills, name)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
