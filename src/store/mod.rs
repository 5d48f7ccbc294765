// ==========================================
// 住房供给管线数据 - 存储层
// ==========================================
// 职责: JSON 文档读写 / CSV 导出
// 约束: 生成器写、校验器读，两者为独立进程，无并发访问
// ==========================================

pub mod csv_export;
pub mod document;
pub mod error;

pub use csv_export::{export_csv, write_csv};
pub use document::{read_series, write_series};
pub use error::{StoreError, StoreResult};
