//! Per-class declaration registries.
//!
//! A [`Class`] owns the descriptors declared in its own body plus references
//! to its parent classes. The merged view (ancestors' declarations with this
//! class's overrides applied) is collected lazily on first use and cached
//! for the lifetime of the class.

use core::fmt;
use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use tracing::trace;

use parametry_core::{Declare, ParamError, Parameter};

/// The collected name → descriptor mapping for a class, in declaration order.
///
/// Shared read-only (`Arc`) between the class and every instance constructed
/// from it; instances keep the `Arc` they were constructed with, so mutating
/// a live class never changes an existing instance's registry.
#[derive(Debug, Default, Clone)]
pub struct Declarations {
    map: IndexMap<String, Arc<Parameter>>,
}

impl Declarations {
    /// Looks up a descriptor by name.
    pub fn get(&self, name: &str) -> Option<&Arc<Parameter>> {
        self.map.get(name)
    }

    /// Whether `name` is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Number of declared parameters.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates `(name, descriptor)` pairs in declaration order: ancestors'
    /// parameters first (overridden ones keep their original position), then
    /// this class's additions.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Parameter>)> {
        self.map.iter().map(|(name, param)| (name.as_str(), param))
    }

    /// Iterates declared names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    fn insert(&mut self, name: String, param: Arc<Parameter>) {
        self.map.insert(name, param);
    }
}

/// A class: a named set of parameter declarations plus ancestor classes.
///
/// Built once with [`Class::builder`]; instances are constructed from it with
/// [`Class::instantiate`] / [`Class::construct`]. Wrap a class in an [`Arc`]
/// to use it as a parent of another class.
#[derive(Debug)]
pub struct Class {
    name: String,
    parents: Vec<Arc<Class>>,
    own: Declarations,
    collected: OnceLock<Arc<Declarations>>,
}

impl Class {
    /// Starts declaring a class.
    pub fn builder(name: impl Into<String>) -> ClassBuilder {
        ClassBuilder {
            name: name.into(),
            parents: Vec::new(),
            own: Declarations::default(),
        }
    }

    /// The class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The merged registry: every parameter visible on this class.
    ///
    /// Collected on first use and cached. Name collisions resolve
    /// most-derived-wins; among multiple parents the earliest listed wins.
    pub fn declarations(&self) -> &Arc<Declarations> {
        self.collected.get_or_init(|| Arc::new(self.collect()))
    }

    fn collect(&self) -> Declarations {
        let mut merged = Declarations::default();
        for parent in &self.parents {
            for (name, param) in parent.declarations().iter() {
                if !merged.contains(name) {
                    merged.insert(name.to_owned(), Arc::clone(param));
                }
            }
        }
        for (name, param) in self.own.iter() {
            // IndexMap keeps an overridden name at its inherited position.
            merged.insert(name.to_owned(), Arc::clone(param));
        }
        trace!(
            class = %self.name,
            parameters = merged.len(),
            "collected declarations"
        );
        merged
    }

    /// Adds a declaration to a live class.
    ///
    /// Instances constructed before this call are unaffected (they hold the
    /// registry they were constructed with); instances constructed afterwards
    /// see the new parameter. Requires exclusive access, so a class already
    /// shared as a parent (behind `Arc`) cannot be mutated.
    pub fn declare_late(
        &mut self,
        name: impl Into<String>,
        declaration: impl Declare,
    ) -> Result<(), ParamError> {
        let name = name.into();
        if self.own.contains(&name) {
            return Err(ParamError::DuplicateDeclaration {
                class: self.name.clone(),
                name,
            });
        }
        let param = declaration.declare()?.named(name.clone());
        trace!(class = %self.name, parameter = %name, "late declaration");
        self.own.insert(name, Arc::new(param));
        let _ = self.collected.take();
        Ok(())
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<class {}: ", self.name)?;
        let mut sep = "";
        for name in self.declarations().names() {
            write!(f, "{sep}{name}")?;
            sep = ", ";
        }
        f.write_str(">")
    }
}

/// Builds a [`Class`]: name parents, declare parameters, then `build`.
#[derive(Debug)]
pub struct ClassBuilder {
    name: String,
    parents: Vec<Arc<Class>>,
    own: Declarations,
}

impl ClassBuilder {
    /// Adds a parent class. Parents contribute their full registries; on a
    /// name collision between parents, the earliest added wins.
    pub fn extends(mut self, parent: &Arc<Class>) -> Self {
        self.parents.push(Arc::clone(parent));
        self
    }

    /// Declares a parameter on this class body.
    ///
    /// Fails with [`ParamError::DuplicateDeclaration`] if `name` was already
    /// declared *on this body*; overriding a parent's declaration is not a
    /// duplicate. Propagates [`ParamError::InvalidDeclaration`] from the
    /// kind builder.
    pub fn declare(
        mut self,
        name: impl Into<String>,
        declaration: impl Declare,
    ) -> Result<Self, ParamError> {
        let name = name.into();
        if self.own.contains(&name) {
            return Err(ParamError::DuplicateDeclaration {
                class: self.name,
                name,
            });
        }
        let param = declaration.declare()?.named(name.clone());
        self.own.insert(name, Arc::new(param));
        Ok(self)
    }

    /// Finishes the class.
    pub fn build(self) -> Class {
        Class {
            name: self.name,
            parents: self.parents,
            own: self.own,
            collected: OnceLock::new(),
        }
    }
}
