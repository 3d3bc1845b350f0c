//! Signature-keyed lookup of type instances.

use std::sync::{Arc, RwLock};

use colt_result::{Error, Result};
use rustc_hash::FxHashMap;

use crate::signature::{TypeSignature, standard_types};
use crate::types::Type;
use crate::varbinary::VarbinaryType;
use crate::varchar::VarcharType;

/// Registry of type instances keyed by [`TypeSignature`].
///
/// Parameterized standard types are created on first request and registered,
/// so every lookup of `varchar(10)` returns the same shared instance. The
/// signature map is the only cache.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: RwLock<FxHashMap<TypeSignature, Arc<dyn Type>>>,
}

impl TypeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with `varchar(1)` and `varbinary`.
    pub fn with_standard_types() -> Result<Self> {
        let registry = Self::new();
        registry.varchar(VarcharType::DEFAULT_LENGTH as i64)?;
        registry.register(Arc::new(VarbinaryType::new()))?;
        Ok(registry)
    }

    /// Add `ty` under its signature. A signature may be registered once.
    pub fn register(&self, ty: Arc<dyn Type>) -> Result<()> {
        let signature = ty.signature().clone();
        let mut types = self
            .types
            .write()
            .expect("TypeRegistry types write lock poisoned");
        if types.contains_key(&signature) {
            return Err(Error::type_already_exists(signature.to_string()));
        }
        tracing::trace!(signature = %signature, "registered type");
        types.insert(signature, ty);
        Ok(())
    }

    /// Exact lookup; does not create types.
    pub fn get(&self, signature: &TypeSignature) -> Option<Arc<dyn Type>> {
        self.types
            .read()
            .expect("TypeRegistry types read lock poisoned")
            .get(signature)
            .cloned()
    }

    /// The registered `varchar(length)`, created and registered on first use.
    ///
    /// An instance registered explicitly under the same signature wins, so
    /// this and [`resolve`](Self::resolve) always hand out the same `Arc`.
    pub fn varchar(&self, length: i64) -> Result<Arc<VarcharType>> {
        let ty = VarcharType::create(length)?;
        let signature = ty.signature().clone();
        if let Some(hit) = self.get(&signature) {
            return downcast_varchar(hit, &signature);
        }

        // Another writer may fill the slot between the read and write locks.
        let hit = Arc::clone(
            self.types
                .write()
                .expect("TypeRegistry types write lock poisoned")
                .entry(signature.clone())
                .or_insert_with(|| {
                    tracing::debug!(length = ty.length(), "cached varchar type");
                    Arc::new(ty) as Arc<dyn Type>
                }),
        );
        downcast_varchar(hit, &signature)
    }

    /// Registered type for `signature`, building standard types on demand.
    ///
    /// Unparameterized `varchar` resolves to the canonical `varchar(1)`.
    pub fn resolve(&self, signature: &TypeSignature) -> Result<Arc<dyn Type>> {
        if let Some(ty) = self.get(signature) {
            return Ok(ty);
        }
        match signature.base() {
            standard_types::VARCHAR => {
                let ty = VarcharType::from_signature(signature)?;
                Ok(self.varchar(ty.length() as i64)? as Arc<dyn Type>)
            }
            standard_types::VARBINARY => {
                let ty: Arc<dyn Type> = Arc::new(VarbinaryType::from_signature(signature)?);
                match self.register(Arc::clone(&ty)) {
                    Ok(()) => Ok(ty),
                    // Lost a race with a concurrent resolve; use the winner.
                    Err(Error::AlreadyExists { .. }) => self.get(signature).ok_or_else(|| {
                        Error::Internal(format!("{signature} vanished from registry"))
                    }),
                    Err(e) => Err(e),
                }
            }
            other => Err(Error::invalid_type_parameter(format!("unknown type '{other}'"))),
        }
    }

    /// Parse and [`resolve`](Self::resolve) a rendered signature.
    pub fn resolve_str(&self, signature: &str) -> Result<Arc<dyn Type>> {
        self.resolve(&TypeSignature::parse(signature)?)
    }

    /// Number of registered signatures.
    pub fn len(&self) -> usize {
        self.types
            .read()
            .expect("TypeRegistry types read lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered signatures in sorted order.
    pub fn signatures(&self) -> Vec<TypeSignature> {
        let mut out: Vec<_> = self
            .types
            .read()
            .expect("TypeRegistry types read lock poisoned")
            .keys()
            .cloned()
            .collect();
        out.sort();
        out
    }
}

fn downcast_varchar(ty: Arc<dyn Type>, signature: &TypeSignature) -> Result<Arc<VarcharType>> {
    ty.as_any_arc().downcast::<VarcharType>().map_err(|_| {
        Error::invalid_type_parameter(format!("{signature} is registered to a non-varchar type"))
    })
}
