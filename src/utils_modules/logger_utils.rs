use std::io::Write;

use crate::common::*;

#[doc = "로그 포멧 정의"]
fn log_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        &record.args()
    )
}

#[doc = "전역 로거설정"]
pub fn set_global_logger() {
    let logger_handle: LoggerHandle = Logger::try_with_str("info")
        .unwrap_or_else(|e| panic!("[Error][set_global_logger()] Invalid log level: {:?}", e))
        .log_to_file(FileSpec::default().directory("logs"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(7),
        )
        .duplicate_to_stdout(Duplicate::All)
        .format(log_format)
        .start()
        .unwrap_or_else(|e| panic!("[Error][set_global_logger()] Logger invalid: {:?}", e));

    /* The handle has to live as long as the process, otherwise logging stops. */
    std::mem::forget(logger_handle);
}
