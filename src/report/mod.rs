/// Output side: charts, workbooks, CSV mirrors and the JSON summary.

pub mod chart;
pub mod csv_export;
pub mod summary;
pub mod workbook;
