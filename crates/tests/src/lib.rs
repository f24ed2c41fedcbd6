//! # Integration Tests
//!
//! 集成测试与端到端测试。
//!
//! 负责：
//! - 合约快照测试
//! - 配置 -> 分发器 -> 通道 的端到端测试
//! - 全局分发器与目标切换

#[cfg(test)]
mod support {
    use std::io;
    use std::sync::{Arc, Mutex};

    use chrono::{DateTime, Local, TimeZone};
    use contracts::{FlagSet, FormattedRecord, RecordSink};

    /// In-memory console stand-in
    #[derive(Clone, Default)]
    pub struct CaptureSink {
        records: Arc<Mutex<Vec<String>>>,
    }

    impl CaptureSink {
        pub fn records(&self) -> Vec<String> {
            self.records.lock().unwrap().clone()
        }
    }

    impl RecordSink for CaptureSink {
        fn name(&self) -> &str {
            "capture"
        }

        fn write(&self, record: &FormattedRecord, _flags: FlagSet) -> io::Result<()> {
            self.records.lock().unwrap().push(record.as_str().to_string());
            Ok(())
        }
    }

    pub fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
    }
}

#[cfg(test)]
mod contract_tests {
    use contracts::{Channel, ChannelProfile, ChannelSet, Flag, FormatKind};

    #[test]
    fn test_builtin_profiles() {
        assert_eq!(
            ChannelProfile::LOG.channels(),
            ChannelSet::of(&[Channel::ConsoleOut, Channel::LogFile])
        );
        assert!(ChannelProfile::LOG.flags().is_empty());

        assert_eq!(
            ChannelProfile::LOG_OVERWRITE.channels(),
            ChannelProfile::LOG.channels()
        );
        assert!(ChannelProfile::LOG_OVERWRITE.flags().contains(Flag::ForceOverwrite));

        assert_eq!(
            ChannelProfile::ERROR.channels(),
            ChannelSet::of(&[Channel::ConsoleErr, Channel::LogFile])
        );
        assert!(ChannelProfile::ERROR.flags().is_empty());
    }

    #[test]
    fn test_error_format_code() {
        assert_eq!(FormatKind::default(), FormatKind::Error);
        assert_eq!(FormatKind::Error.code(), 1);
        assert!(FormatKind::try_from(0u32).is_err());
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::fs;

    use config_loader::{ConfigFormat, ConfigLoader};
    use contracts::{CallSite, Channel, ChannelProfile, ChannelSet, Flag, FlagSet, FormatKind};
    use dispatcher::{Dispatcher, DispatcherConfig, FixedClock};
    use tempfile::tempdir;

    use crate::support::{fixed_time, CaptureSink};

    /// End-to-end test: config text -> LoggerBlueprint -> Dispatcher -> log file
    #[test]
    fn test_config_to_log_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("app.log");
        let content = format!(
            r#"
target_path = "{}"
default_profile = "file_only"

[[profiles]]
name = "file_only"
channels = ["log_file"]
"#,
            target.display().to_string().replace('\\', "\\\\")
        );

        let blueprint = ConfigLoader::load_from_str(&content, ConfigFormat::Toml).unwrap();
        let dispatcher = Dispatcher::from_blueprint(&blueprint).unwrap();
        assert_eq!(dispatcher.target_path(), target.as_path());

        dispatcher.log("first").unwrap();
        dispatcher.log("second").unwrap();

        let contents = fs::read_to_string(&target).unwrap();
        let first = contents.find(": first\n\n").unwrap();
        let second = contents.find(": second\n\n").unwrap();
        assert!(first < second);
        assert!(contents.contains("File: "));
        assert_eq!(dispatcher.records_dispatched(), 2);
    }

    /// `format` must yield exactly what the ERROR profile writes
    #[test]
    fn test_format_matches_error_dispatch() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("err.log");
        let out = CaptureSink::default();
        let err = CaptureSink::default();

        let dispatcher = Dispatcher::builder(DispatcherConfig {
            target_path: target.clone(),
            ..DispatcherConfig::default()
        })
        .console_out(out.clone())
        .console_err(err.clone())
        .clock(FixedClock::new(fixed_time()))
        .build()
        .unwrap();

        let site = CallSite::new("src/worker.rs", 42, 7, "worker::run");
        dispatcher
            .dispatch_at("disk full", ChannelProfile::ERROR, site)
            .unwrap();
        let formatted = dispatcher.format_at("disk full", FormatKind::Error, &site);

        let expected =
            "2025-01-02_03:04:05\nFile: src/worker.rs(42:7)\nworker::run: disk full\n\n";
        assert_eq!(formatted.as_str(), expected);
        assert!(out.records().is_empty());
        assert_eq!(err.records(), vec![expected.to_string()]);
        assert_eq!(fs::read_to_string(&target).unwrap(), expected);
    }

    #[test]
    fn test_overwrite_then_append() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("t.log");
        let dispatcher = Dispatcher::builder(DispatcherConfig {
            target_path: target.clone(),
            ..DispatcherConfig::default()
        })
        .console_out(CaptureSink::default())
        .console_err(CaptureSink::default())
        .build()
        .unwrap();

        dispatcher.dispatch("A", Channel::LogFile).unwrap();
        dispatcher.dispatch("B", Channel::LogFile).unwrap();
        let overwrite = (
            ChannelSet::from(Channel::LogFile),
            FlagSet::from(Flag::ForceOverwrite),
        );
        dispatcher.dispatch("C", overwrite).unwrap();
        dispatcher.dispatch("D", ChannelProfile::LOG).unwrap();

        let contents = fs::read_to_string(&target).unwrap();
        assert!(!contents.contains(": A\n"));
        assert!(!contents.contains(": B\n"));
        let c = contents.find(": C\n\n").unwrap();
        let d = contents.find(": D\n\n").unwrap();
        assert!(c < d);
    }

    #[test]
    fn test_retarget_leaves_original_untouched() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.log");
        let second = dir.path().join("second.log");

        let original = Dispatcher::builder(DispatcherConfig {
            target_path: first.clone(),
            ..DispatcherConfig::default()
        })
        .console_out(CaptureSink::default())
        .console_err(CaptureSink::default())
        .build()
        .unwrap();
        let moved = original.retarget(&second);

        moved.dispatch("moved", Channel::LogFile).unwrap();
        original.dispatch("stayed", Channel::LogFile).unwrap();

        assert_eq!(original.target_path(), first.as_path());
        assert_eq!(moved.target_path(), second.as_path());
        assert!(fs::read_to_string(&first).unwrap().contains(": stayed\n\n"));
        assert!(fs::read_to_string(&second).unwrap().contains(": moved\n\n"));
    }

    #[test]
    fn test_missing_directory_reports_only_file_channel() {
        let dir = tempdir().unwrap();
        let out = CaptureSink::default();
        let dispatcher = Dispatcher::builder(DispatcherConfig {
            target_path: dir.path().join("missing").join("t.log"),
            ..DispatcherConfig::default()
        })
        .console_out(out.clone())
        .console_err(CaptureSink::default())
        .build()
        .unwrap();

        let err = dispatcher.dispatch("still printed", ChannelProfile::LOG).unwrap_err();
        assert_eq!(err.attempted(), 2);
        assert!(err.failed(Channel::LogFile));
        assert!(!err.failed(Channel::ConsoleOut));
        assert_eq!(out.records().len(), 1);
        assert!(!dir.path().join("missing").exists());
    }
}

#[cfg(test)]
mod global_tests {
    use std::fs;

    use contracts::{Channel, ChannelSet, Flag};
    use dispatcher::{clog, global, Dispatcher, DispatcherConfig};
    use tempfile::tempdir;

    use crate::support::CaptureSink;

    #[test]
    fn test_global_clog_follows_target_override() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.log");
        let second = dir.path().join("second.log");
        let out = CaptureSink::default();

        global::install(
            Dispatcher::builder(DispatcherConfig {
                target_path: first.clone(),
                ..DispatcherConfig::default()
            })
            .console_out(out.clone())
            .console_err(CaptureSink::default())
            .build()
            .unwrap(),
        );

        clog!("one");
        global::set_log_target_path(&second);
        clog!("two", ChannelSet::from(Channel::LogFile), Flag::ForceOverwrite);

        assert_eq!(global::log_target_path(), second);
        assert!(fs::read_to_string(&first).unwrap().ends_with(": one\n\n"));

        let second_contents = fs::read_to_string(&second).unwrap();
        assert!(second_contents.contains("test_global_clog_follows_target_override: two"));
        assert_eq!(out.records().len(), 1);

        global::install(Dispatcher::default());
    }
}

#[cfg(test)]
mod observability_tests {
    use observability::{init_with_config, LogFormat, ObservabilityConfig};

    #[test]
    fn test_dispatch_diagnostics_with_json_subscriber() {
        init_with_config(ObservabilityConfig {
            log_format: LogFormat::Json,
            default_log_level: "trace".to_string(),
        })
        .unwrap();

        let dispatcher = dispatcher::Dispatcher::default();
        assert!(dispatcher.dispatch("quiet", contracts::ChannelSet::EMPTY).is_ok());
    }
}
