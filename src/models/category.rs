//! Task classification labels.
//!
//! The label set is closed: every task belongs to exactly one of ten
//! work classifications. Labels serialize as their short Indonesian names,
//! which is what task stores and import files carry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

/// Work classification of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskCategory {
    /// Data backup and recovery. Confined to the closing days of a month
    /// by the default options.
    #[serde(rename = "Backup dan Pemulihan Data")]
    DataBackup,
    #[serde(rename = "Prosedur Sistem Jaringan")]
    NetworkProcedure,
    #[serde(rename = "Deteksi dan Perbaikan Jaringan")]
    NetworkRepair,
    #[serde(rename = "Pemeliharaan Infrastruktur TI")]
    InfrastructureMaintenance,
    #[serde(rename = "Pemasangan Infrastruktur TI")]
    InfrastructureInstallation,
    #[serde(rename = "Pengembangan Aplikasi")]
    ApplicationDevelopment,
    #[serde(rename = "Instalasi dan Konfigurasi")]
    InstallationConfiguration,
    #[serde(rename = "Editing Multimedia")]
    MultimediaEditing,
    #[serde(rename = "Tugas Lainnya")]
    OtherDuties,
    #[serde(rename = "Laporan Pelaksanaan")]
    ExecutionReport,
}

impl TaskCategory {
    /// All categories, in declaration order.
    pub const ALL: [TaskCategory; 10] = [
        TaskCategory::DataBackup,
        TaskCategory::NetworkProcedure,
        TaskCategory::NetworkRepair,
        TaskCategory::InfrastructureMaintenance,
        TaskCategory::InfrastructureInstallation,
        TaskCategory::ApplicationDevelopment,
        TaskCategory::InstallationConfiguration,
        TaskCategory::MultimediaEditing,
        TaskCategory::OtherDuties,
        TaskCategory::ExecutionReport,
    ];

    /// Short label, as stored.
    pub fn label(self) -> &'static str {
        match self {
            TaskCategory::DataBackup => "Backup dan Pemulihan Data",
            TaskCategory::NetworkProcedure => "Prosedur Sistem Jaringan",
            TaskCategory::NetworkRepair => "Deteksi dan Perbaikan Jaringan",
            TaskCategory::InfrastructureMaintenance => "Pemeliharaan Infrastruktur TI",
            TaskCategory::InfrastructureInstallation => "Pemasangan Infrastruktur TI",
            TaskCategory::ApplicationDevelopment => "Pengembangan Aplikasi",
            TaskCategory::InstallationConfiguration => "Instalasi dan Konfigurasi",
            TaskCategory::MultimediaEditing => "Editing Multimedia",
            TaskCategory::OtherDuties => "Tugas Lainnya",
            TaskCategory::ExecutionReport => "Laporan Pelaksanaan",
        }
    }

    /// Long official job description the short label abbreviates.
    ///
    /// Import files frequently carry this form instead of the label.
    pub fn description(self) -> &'static str {
        match self {
            TaskCategory::DataBackup => "Melakukan backup atau pemulihan data",
            TaskCategory::NetworkProcedure => "Menyusun prosedur pemanfaatan sistem jaringan",
            TaskCategory::NetworkRepair => {
                "Melakukan deteksi dan atau perbaikan terhadap permasalahan yang terjadi pada sistem jaringan kompleks"
            }
            TaskCategory::InfrastructureMaintenance => "Melakukan pemeliharaan infrastruktur TI",
            TaskCategory::InfrastructureInstallation => "Melakukan pemasangan infrastruktur TI",
            TaskCategory::ApplicationDevelopment => {
                "Mengembangkan program aplikasi sistem informasi"
            }
            TaskCategory::InstallationConfiguration => {
                "Melakukan instalasi/upgrade dan konfigurasi sistem operasi/aplikasi"
            }
            TaskCategory::MultimediaEditing => {
                "Melakukan editing objek multimedia kompleks dengan piranti lunak"
            }
            TaskCategory::OtherDuties => "Melaksanakan tugas lainnya yang diperintahkan oleh pimpinan",
            TaskCategory::ExecutionReport => {
                "Membuat laporan pelaksanaan tugas sesuai petunjuk pelaksanaan (juklak) sebagai pertanggung jawaban kerja"
            }
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskCategory {
    type Err = ScheduleError;

    /// Accepts either the short label or the long description.
    ///
    /// Surrounding whitespace and a single trailing period are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let key = trimmed.strip_suffix('.').unwrap_or(trimmed).trim_end();

        TaskCategory::ALL
            .into_iter()
            .find(|c| c.label() == key || c.description() == key)
            .ok_or_else(|| ScheduleError::UnknownCategory(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_label() {
        let c: TaskCategory = "Editing Multimedia".parse().unwrap();
        assert_eq!(c, TaskCategory::MultimediaEditing);
    }

    #[test]
    fn test_parse_long_description() {
        let c: TaskCategory = "Melakukan backup atau pemulihan data".parse().unwrap();
        assert_eq!(c, TaskCategory::DataBackup);

        // Import files sometimes end the sentence with a period
        let c: TaskCategory = "  Membuat laporan pelaksanaan tugas sesuai petunjuk pelaksanaan (juklak) sebagai pertanggung jawaban kerja. "
            .parse()
            .unwrap();
        assert_eq!(c, TaskCategory::ExecutionReport);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Gardening".parse::<TaskCategory>().unwrap_err();
        assert_eq!(err, ScheduleError::UnknownCategory("Gardening".into()));
    }

    #[test]
    fn test_labels_round_trip_through_display() {
        for c in TaskCategory::ALL {
            assert_eq!(c.to_string().parse::<TaskCategory>().unwrap(), c);
        }
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&TaskCategory::OtherDuties).unwrap();
        assert_eq!(json, "\"Tugas Lainnya\"");
        let back: TaskCategory = serde_json::from_str("\"Pengembangan Aplikasi\"").unwrap();
        assert_eq!(back, TaskCategory::ApplicationDevelopment);
    }
}
