//! Type source aggregation: default context, global registry, and an optional
//! additional source merged into one ordered list.

use urm_core::traits::TypeSource;

use super::directory::WalkOptions;
use super::location::open_location;

/// Extra types supplied by the caller for one discovery run.
pub enum AdditionalSource<'a> {
    /// A source the caller owns; the engine borrows it and never releases it.
    Provided(&'a dyn TypeSource),
    /// Locations the engine opens itself and releases when the run ends:
    /// class directories, `.jar`/`.zip` archives, `.json` type indexes.
    Locations(Vec<String>),
}

impl std::fmt::Debug for AdditionalSource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Provided(source) => f.debug_tuple("Provided").field(&source.label()).finish(),
            Self::Locations(locations) => f.debug_tuple("Locations").field(locations).finish(),
        }
    }
}

enum SourceHandle<'a> {
    Borrowed(&'a dyn TypeSource),
    Opened(Box<dyn TypeSource>),
}

impl SourceHandle<'_> {
    fn get(&self) -> &dyn TypeSource {
        match self {
            Self::Borrowed(source) => *source,
            Self::Opened(source) => source.as_ref(),
        }
    }
}

/// Ordered sources for one discovery run.
///
/// Sources opened from locations are owned here and dropped with the set.
pub struct SourceSet<'a> {
    handles: Vec<SourceHandle<'a>>,
}

impl<'a> SourceSet<'a> {
    /// Default source, then global source, then the additional source.
    ///
    /// Malformed locations are logged and dropped; if none can be opened the
    /// set holds only the default and global sources.
    pub fn assemble(
        default: &'a dyn TypeSource,
        global: &'a dyn TypeSource,
        additional: Option<&AdditionalSource<'a>>,
        options: &WalkOptions,
    ) -> Self {
        let mut handles = vec![SourceHandle::Borrowed(default), SourceHandle::Borrowed(global)];

        match additional {
            None => {}
            Some(AdditionalSource::Provided(source)) => {
                handles.push(SourceHandle::Borrowed(*source));
            }
            Some(AdditionalSource::Locations(locations)) => {
                for location in locations {
                    match open_location(location, options) {
                        Ok(source) => handles.push(SourceHandle::Opened(source)),
                        Err(e) => {
                            tracing::warn!(location = %location, error = %e, "dropping source location");
                        }
                    }
                }
            }
        }

        let set = Self { handles };
        tracing::debug!(sources = ?set.labels(), "type sources assembled");
        set
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn TypeSource> + '_ {
        self.handles.iter().map(SourceHandle::get)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Number of sources this set opened and will release.
    pub fn opened_count(&self) -> usize {
        self.handles
            .iter()
            .filter(|handle| matches!(handle, SourceHandle::Opened(_)))
            .count()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.iter().map(|source| source.label()).collect()
    }
}

impl Drop for SourceSet<'_> {
    fn drop(&mut self) {
        let opened = self.opened_count();
        if opened > 0 {
            tracing::debug!(opened, "releasing opened type sources");
        }
    }
}
