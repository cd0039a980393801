// Copyright 2025 Cowboy AI, LLC.

//! Finite categories backed by explicit registries
//!
//! A [`FiniteCategory`] names its objects and morphisms by string id and
//! records composition in an explicit table. Identity morphisms are created
//! automatically when an object is registered. The whole structure is
//! serializable, so a category can be stored or exchanged as data.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Category, ObjectSet};
use crate::errors::{AlgebraError, AlgebraResult};

/// An object in a finite category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatObject {
    /// Unique identifier within the category
    pub id: String,

    /// Metadata about the object
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub metadata: IndexMap<String, String>,
}

impl CatObject {
    /// Create an object with no metadata
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metadata: IndexMap::new(),
        }
    }
}

/// A morphism in a finite category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatMorphism {
    /// Unique identifier within the category
    pub id: String,

    /// Source object id
    pub source: String,

    /// Target object id
    pub target: String,
}

impl CatMorphism {
    /// Create a morphism between two objects
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

/// One entry of the composition table: `second ∘ first = result`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompositionRule {
    /// The morphism applied first
    pub first: String,

    /// The morphism applied second
    pub second: String,

    /// The composite morphism
    pub result: String,
}

/// A finite category with explicit object and morphism registries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiniteCategory {
    /// Unique identifier for this category
    pub id: Uuid,

    /// Name of the category
    pub name: String,

    /// Objects, keyed by id
    pub objects: IndexMap<String, CatObject>,

    /// Morphisms, keyed by id
    pub morphisms: IndexMap<String, CatMorphism>,

    /// Composition table
    pub compositions: Vec<CompositionRule>,

    /// Identity morphism id for each object
    pub identities: IndexMap<String, String>,
}

impl FiniteCategory {
    /// Create a new, empty category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            objects: IndexMap::new(),
            morphisms: IndexMap::new(),
            compositions: Vec::new(),
            identities: IndexMap::new(),
        }
    }

    /// Add an object, creating its identity morphism `id_<object>`
    pub fn add_object(&mut self, object: CatObject) -> AlgebraResult<()> {
        if self.objects.contains_key(&object.id) {
            return Err(AlgebraError::AlreadyExists(format!(
                "Object {}",
                object.id
            )));
        }

        let identity_id = format!("id_{}", object.id);
        let identity = CatMorphism::new(identity_id.clone(), object.id.clone(), object.id.clone());

        self.morphisms.insert(identity_id.clone(), identity);
        self.identities.insert(object.id.clone(), identity_id);
        self.objects.insert(object.id.clone(), object);

        Ok(())
    }

    /// Add a morphism; its source and target objects must already exist
    pub fn add_morphism(&mut self, morphism: CatMorphism) -> AlgebraResult<()> {
        if !self.objects.contains_key(&morphism.source) {
            return Err(AlgebraError::ObjectNotFound(morphism.source));
        }
        if !self.objects.contains_key(&morphism.target) {
            return Err(AlgebraError::ObjectNotFound(morphism.target));
        }
        if self.morphisms.contains_key(&morphism.id) {
            return Err(AlgebraError::AlreadyExists(format!(
                "Morphism {}",
                morphism.id
            )));
        }

        self.morphisms.insert(morphism.id.clone(), morphism);
        Ok(())
    }

    /// Look up a morphism by id
    pub fn morphism(&self, id: &str) -> AlgebraResult<&CatMorphism> {
        self.morphisms
            .get(id)
            .ok_or_else(|| AlgebraError::MorphismNotFound(id.to_string()))
    }

    /// Record `second ∘ first = result` in the composition table
    ///
    /// Validates that the pair is composable and that `result` has the
    /// boundaries of the composite.
    pub fn define_composition(
        &mut self,
        first: &str,
        second: &str,
        result: &str,
    ) -> AlgebraResult<()> {
        let first_morph = self.morphism(first)?.clone();
        let second_morph = self.morphism(second)?.clone();
        let result_morph = self.morphism(result)?.clone();

        if first_morph.target != second_morph.source {
            return Err(AlgebraError::TypeMismatch {
                target: first_morph.target,
                source: second_morph.source,
            });
        }

        if result_morph.source != first_morph.source || result_morph.target != second_morph.target
        {
            return Err(AlgebraError::InvalidOperation {
                reason: format!(
                    "Result {} must go {} -> {}",
                    result, first_morph.source, second_morph.target
                ),
            });
        }

        self.compositions.push(CompositionRule {
            first: first.to_string(),
            second: second.to_string(),
            result: result.to_string(),
        });
        Ok(())
    }

    /// All morphisms out of an object
    pub fn morphisms_from(&self, source: &str) -> Vec<&CatMorphism> {
        self.morphisms
            .values()
            .filter(|m| m.source == source)
            .collect()
    }

    /// All morphisms into an object
    pub fn morphisms_to(&self, target: &str) -> Vec<&CatMorphism> {
        self.morphisms
            .values()
            .filter(|m| m.target == target)
            .collect()
    }

    fn lookup_composition(&self, first: &str, second: &str) -> Option<&str> {
        self.compositions
            .iter()
            .find(|rule| rule.first == first && rule.second == second)
            .map(|rule| rule.result.as_str())
    }

    /// Compose by id: `compose(g, f)` is `g ∘ f` (`f` applied first)
    ///
    /// Consults the composition table, then falls back on the identity
    /// laws. Composing with no defined composite is an error.
    pub fn compose_ids(&self, g: &str, f: &str) -> AlgebraResult<String> {
        let f_morph = self.morphism(f)?;
        let g_morph = self.morphism(g)?;

        if f_morph.target != g_morph.source {
            return Err(AlgebraError::TypeMismatch {
                target: f_morph.target.clone(),
                source: g_morph.source.clone(),
            });
        }

        if let Some(result) = self.lookup_composition(f, g) {
            return Ok(result.to_string());
        }

        // Identity law: g ∘ id = g
        if let Some(id) = self.identities.get(&g_morph.source) {
            if f == id {
                return Ok(g.to_string());
            }
        }

        // Identity law: id ∘ f = f
        if let Some(id) = self.identities.get(&f_morph.target) {
            if g == id {
                return Ok(f.to_string());
            }
        }

        Err(AlgebraError::InvalidOperation {
            reason: format!("Composition {} ∘ {} not defined", g, f),
        })
    }

    /// Verify the category laws over the whole registry
    ///
    /// Checks that every identity morphism is an endomorphism on its
    /// object, that identities are neutral for every morphism, and that
    /// every triple with fully defined composites associates.
    pub fn verify_laws(&self) -> AlgebraResult<()> {
        for (obj_id, identity_id) in &self.identities {
            let identity = self.morphism(identity_id)?;
            if identity.source != *obj_id || identity.target != *obj_id {
                return Err(AlgebraError::InvalidOperation {
                    reason: format!("Identity {} is not an endomorphism on {}", identity_id, obj_id),
                });
            }
        }

        for (m_id, m) in &self.morphisms {
            let id_src = self
                .identities
                .get(&m.source)
                .ok_or_else(|| AlgebraError::ObjectNotFound(m.source.clone()))?;
            let id_tgt = self
                .identities
                .get(&m.target)
                .ok_or_else(|| AlgebraError::ObjectNotFound(m.target.clone()))?;
            if self.compose_ids(m_id, id_src)? != *m_id {
                return Err(AlgebraError::InvalidOperation {
                    reason: format!("{} ∘ {} != {}", m_id, id_src, m_id),
                });
            }
            if self.compose_ids(id_tgt, m_id)? != *m_id {
                return Err(AlgebraError::InvalidOperation {
                    reason: format!("{} ∘ {} != {}", id_tgt, m_id, m_id),
                });
            }
        }

        // (h ∘ g) ∘ f = h ∘ (g ∘ f) wherever both sides are defined
        for (f_id, f) in &self.morphisms {
            for (g_id, g) in &self.morphisms {
                if f.target != g.source {
                    continue;
                }
                for (h_id, h) in &self.morphisms {
                    if g.target != h.source {
                        continue;
                    }
                    let left = self
                        .compose_ids(g_id, f_id)
                        .and_then(|gf| self.compose_ids(h_id, &gf));
                    let right = self
                        .compose_ids(h_id, g_id)
                        .and_then(|hg| self.compose_ids(&hg, f_id));
                    if let (Ok(left), Ok(right)) = (left, right) {
                        if left != right {
                            return Err(AlgebraError::InvalidOperation {
                                reason: format!(
                                    "Associativity violated: ({} ∘ {}) ∘ {} != {} ∘ ({} ∘ {})",
                                    h_id, g_id, f_id, h_id, g_id, f_id
                                ),
                            });
                        }
                    }
                }
            }
        }

        tracing::debug!(
            category = %self.name,
            objects = self.objects.len(),
            morphisms = self.morphisms.len(),
            "category laws verified"
        );
        Ok(())
    }
}

impl Category for FiniteCategory {
    type Object = String;
    type Morphism = String;

    fn objects(&self) -> ObjectSet<String> {
        ObjectSet::finite(self.objects.keys().cloned().collect())
    }

    fn source(&self, m: &String) -> AlgebraResult<String> {
        Ok(self.morphism(m)?.source.clone())
    }

    fn target(&self, m: &String) -> AlgebraResult<String> {
        Ok(self.morphism(m)?.target.clone())
    }

    fn identity(&self, object: &String) -> AlgebraResult<String> {
        self.identities
            .get(object)
            .cloned()
            .ok_or_else(|| AlgebraError::ObjectNotFound(object.clone()))
    }

    fn compose(&self, g: &String, f: &String) -> AlgebraResult<String> {
        self.compose_ids(g, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_category() -> FiniteCategory {
        // A -> B -> C with f, g, and the composite h = g ∘ f
        let mut cat = FiniteCategory::new("Chain");
        for obj in ["A", "B", "C"] {
            cat.add_object(CatObject::new(obj)).unwrap();
        }
        cat.add_morphism(CatMorphism::new("f", "A", "B")).unwrap();
        cat.add_morphism(CatMorphism::new("g", "B", "C")).unwrap();
        cat.add_morphism(CatMorphism::new("h", "A", "C")).unwrap();
        cat.define_composition("f", "g", "h").unwrap();
        cat
    }

    #[test]
    fn test_add_object_creates_identity() {
        let mut cat = FiniteCategory::new("Test");
        cat.add_object(CatObject::new("X")).unwrap();
        assert_eq!(cat.objects.len(), 1);
        assert_eq!(cat.morphisms.len(), 1);
        assert_eq!(cat.identity(&"X".to_string()).unwrap(), "id_X");
    }

    #[test]
    fn test_duplicate_object_rejected() {
        let mut cat = FiniteCategory::new("Test");
        cat.add_object(CatObject::new("X")).unwrap();
        let err = cat.add_object(CatObject::new("X")).unwrap_err();
        assert!(matches!(err, AlgebraError::AlreadyExists(_)));
    }

    #[test]
    fn test_morphism_requires_known_boundaries() {
        let mut cat = FiniteCategory::new("Test");
        cat.add_object(CatObject::new("A")).unwrap();
        let err = cat
            .add_morphism(CatMorphism::new("f", "A", "Missing"))
            .unwrap_err();
        assert!(matches!(err, AlgebraError::ObjectNotFound(_)));
    }

    #[test]
    fn test_composition_table_lookup() {
        let cat = chain_category();
        assert_eq!(cat.compose_ids("g", "f").unwrap(), "h");
    }

    #[test]
    fn test_compose_type_mismatch() {
        let cat = chain_category();
        // f: A -> B cannot follow g: B -> C
        let err = cat.compose_ids("f", "g").unwrap_err();
        assert!(matches!(err, AlgebraError::TypeMismatch { .. }));
    }

    #[test]
    fn test_identity_laws_shortcut() {
        let cat = chain_category();
        assert_eq!(cat.compose_ids("f", "id_A").unwrap(), "f");
        assert_eq!(cat.compose_ids("id_B", "f").unwrap(), "f");
    }

    #[test]
    fn test_verify_laws_on_chain() {
        let cat = chain_category();
        assert!(cat.verify_laws().is_ok());
    }

    #[test]
    fn test_define_composition_validates_result_boundaries() {
        let mut cat = chain_category();
        cat.add_morphism(CatMorphism::new("wrong", "B", "C")).unwrap();
        let err = cat.define_composition("f", "g", "wrong").unwrap_err();
        assert!(matches!(err, AlgebraError::InvalidOperation { .. }));
    }
}
