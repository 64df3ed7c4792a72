pub mod catalog;
pub mod skill;

pub use catalog::{resolve, to_function_declarations, SkillCatalog};
pub use skill::{FunctionDeclaration, SkillDescriptor, SkillInvoker};
