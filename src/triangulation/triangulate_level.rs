use tracing::{debug, info};

use super::{SectorTriangles, TriangulateSector, TriangulationParams};
use crate::error::Result;
use crate::level::{LevelStore, SectorId};
use crate::warning::WarningLog;

/// Triangulates every sector of a level in sector-index order.
///
/// A sector that cannot be solved only adds a warning; the others are
/// unaffected.
#[derive(Default)]
pub struct TriangulateLevel {
    params: TriangulationParams,
}

impl TriangulateLevel {
    /// Creates a new `TriangulateLevel` operation with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_params(mut self, params: TriangulationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the triangulation, returning each sector's triangles.
    ///
    /// # Errors
    ///
    /// Returns an error if a sector refers to a wall or vertex that is not
    /// in the store.
    pub fn execute(
        &self,
        store: &LevelStore,
        warnings: &mut WarningLog,
    ) -> Result<Vec<(SectorId, SectorTriangles)>> {
        let mut sectors: Vec<_> = store.sectors().map(|(id, s)| (s.index, id)).collect();
        sectors.sort_unstable();

        let mut failed = 0usize;
        let mut results = Vec::with_capacity(sectors.len());
        for (_, id) in sectors {
            let warned_before = warnings.len();
            let triangles = TriangulateSector::new(id)
                .with_params(self.params)
                .execute(store, warnings)?;
            if warnings.len() > warned_before {
                failed += 1;
            }
            debug!(triangles = triangles.triangle_count(), "sector done");
            results.push((id, triangles));
        }

        info!(
            level = store.name(),
            sectors = results.len(),
            failed,
            "triangulated level"
        );
        Ok(results)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;
    use tracing_subscriber::EnvFilter;

    use super::*;
    use crate::level::{VertexData, WallFlags};
    use crate::math::Point2;

    fn test_subscriber() -> impl tracing::Subscriber + Send + Sync {
        tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(EnvFilter::from_default_env())
            .finish()
    }

    /// Log output collected in memory.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn add_square(store: &mut LevelStore, x0: f64) -> SectorId {
        let sector = store.add_sector(None);
        store
            .add_loop(
                sector,
                &[p(x0, 0.0), p(x0 + 2.0, 0.0), p(x0 + 2.0, 2.0), p(x0, 2.0)],
                WallFlags::empty(),
            )
            .unwrap();
        sector
    }

    fn add_open_chain(store: &mut LevelStore, x0: f64) -> SectorId {
        let sector = store.add_sector(None);
        let a = store.add_vertex(VertexData::from_xz(x0, 0.0));
        let b = store.add_vertex(VertexData::from_xz(x0 + 1.0, 0.0));
        let c = store.add_vertex(VertexData::from_xz(x0 + 1.0, 1.0));
        store.add_wall(sector, a, b, WallFlags::empty()).unwrap();
        store.add_wall(sector, b, c, WallFlags::empty()).unwrap();
        sector
    }

    #[test]
    fn broken_sector_does_not_affect_others() {
        let _guard = tracing::subscriber::set_default(test_subscriber());
        let mut store = LevelStore::new("SECBASE");
        let good = add_square(&mut store, 0.0);
        store.sector_mut(good).unwrap().name = Some("yard".into());
        let broken = add_open_chain(&mut store, 5.0);

        let mut warnings = WarningLog::new();
        let results = TriangulateLevel::new()
            .execute(&store, &mut warnings)
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, good);
        assert_eq!(results[0].1.triangle_count(), 2);
        assert_eq!(results[1].0, broken);
        assert!(results[1].1.is_empty());

        assert_eq!(warnings.len(), 1);
        assert!(warnings.iter().next().unwrap().message.starts_with("sector 1 "));
    }

    #[test]
    fn summary_counts_failed_sectors() {
        let mut store = LevelStore::new("SECBASE");
        add_open_chain(&mut store, 0.0);
        add_square(&mut store, 5.0);
        add_open_chain(&mut store, 10.0);

        // Warnings already in the log are not counted as failures.
        let mut warnings = WarningLog::new();
        warnings.push(crate::warning::Warning::new("SECBASE.LEV", "bad token").at_line(3));

        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        let results = tracing::subscriber::with_default(subscriber, || {
            TriangulateLevel::new().execute(&store, &mut warnings)
        })
        .unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(warnings.len(), 3);
        let log = captured.text();
        assert!(log.contains("triangulated level"), "{log}");
        assert!(log.contains("sectors=3"), "{log}");
        assert!(log.contains("failed=2"), "{log}");
    }

    #[test]
    fn empty_level() {
        let _guard = tracing::subscriber::set_default(test_subscriber());
        let store = LevelStore::new("EMPTY");
        let mut warnings = WarningLog::new();
        let results = TriangulateLevel::new()
            .with_params(TriangulationParams { tolerance: 1e-6 })
            .execute(&store, &mut warnings)
            .unwrap();
        assert!(results.is_empty());
        assert!(warnings.is_empty());
    }
}
