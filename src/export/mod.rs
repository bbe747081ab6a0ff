//! CSV export of the selected path.

use std::path::PathBuf;

use bevy::prelude::*;
use bevy::tasks::{IoTaskPool, Task};
use futures_lite::future;

use crate::common::Coordinate;
use crate::editor::SelectedGb;
use crate::map::GbPaths;

/// Message to export the selected path as CSV
#[derive(Message)]
pub struct ExportCsvRequest;

/// Export progress and the most recent failure, shown in a dialog
#[derive(Resource, Default)]
pub struct CsvExportState {
    pub error: Option<String>,
    pub is_exporting: bool,
}

/// Background task writing the CSV file
#[derive(Component)]
pub struct CsvWriteTask(pub Task<CsvWriteResult>);

/// Result of a CSV write
pub struct CsvWriteResult {
    pub path: PathBuf,
    pub success: bool,
    pub error: Option<String>,
}

/// Default export filename for a gb's path
pub fn csv_filename(gb: &str) -> String {
    format!("{}-points.csv", gb)
}

/// CSV document with latitude/longitude columns, one row per point in order.
pub fn csv_document(points: &[Coordinate]) -> String {
    let mut out = String::from("latitude,longitude\n");
    for point in points {
        out.push_str(&format!("{},{}\n", point.latitude, point.longitude));
    }
    out
}

/// Ask for a save location and start the background write
pub fn export_csv_system(
    mut commands: Commands,
    mut events: MessageReader<ExportCsvRequest>,
    paths: Res<GbPaths>,
    selected: Res<SelectedGb>,
    mut export_state: ResMut<CsvExportState>,
) {
    for _ in events.read() {
        if export_state.is_exporting {
            warn!("CSV export already in progress");
            continue;
        }

        let Some(points) = paths.polyline_points(&selected.id) else {
            let message = format!("No path exists for '{}' yet", selected.id);
            warn!("{}", message);
            export_state.error = Some(message);
            continue;
        };

        let Some(path) = rfd::FileDialog::new()
            .set_file_name(csv_filename(&selected.id))
            .add_filter("CSV Files", &["csv"])
            .set_title("Export Path")
            .save_file()
        else {
            // User cancelled the dialog
            continue;
        };

        let document = csv_document(points);

        export_state.is_exporting = true;
        export_state.error = None;

        let task_pool = IoTaskPool::get();
        let task = task_pool.spawn(async move {
            match std::fs::write(&path, document) {
                Ok(()) => CsvWriteResult {
                    path,
                    success: true,
                    error: None,
                },
                Err(e) => CsvWriteResult {
                    path,
                    success: false,
                    error: Some(format!("Failed to write CSV: {}", e)),
                },
            }
        });

        commands.spawn(CsvWriteTask(task));
    }
}

/// Drain finished CSV writes
pub fn poll_csv_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut CsvWriteTask)>,
    mut export_state: ResMut<CsvExportState>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        let Some(result) = future::block_on(future::poll_once(&mut task.0)) else {
            continue;
        };

        export_state.is_exporting = false;

        if result.success {
            info!("Path exported to {:?}", result.path);
        } else if let Some(error) = result.error {
            error!("{}", error);
            export_state.error = Some(error);
        }

        commands.entity(entity).despawn();
    }
}

pub struct ExportPlugin;

impl Plugin for ExportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CsvExportState>()
            .add_message::<ExportCsvRequest>()
            .add_systems(
                Update,
                (
                    export_csv_system.run_if(on_message::<ExportCsvRequest>),
                    poll_csv_tasks,
                ),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_filename() {
        assert_eq!(csv_filename("gb1"), "gb1-points.csv");
    }

    #[test]
    fn test_csv_document_header_and_rows_in_order() {
        let points = [
            Coordinate::new(38.1, -121.1),
            Coordinate::new(38.2, -121.2),
        ];
        assert_eq!(
            csv_document(&points),
            "latitude,longitude\n38.1,-121.1\n38.2,-121.2\n"
        );
    }

    #[test]
    fn test_csv_document_empty_path_is_header_only() {
        assert_eq!(csv_document(&[]), "latitude,longitude\n");
    }

    #[test]
    fn test_csv_document_full_precision() {
        let points = [Coordinate::new(38.586298044283105, -121.35166610449501)];
        let document = csv_document(&points);
        // Display of f64 is shortest-roundtrip, so no precision is lost
        assert!(document.contains("38.586298044283105,-121.35166610449501"));
    }
}
