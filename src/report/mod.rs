/*!
 * Report Module
 * Consumers of a finished run: CSV export, text tables and Gantt summaries
 */

pub mod compare;
pub mod csv;
pub mod gantt;
pub mod table;

pub use compare::{compare_algorithms, render_comparison, ComparisonRow};
pub use csv::{export_csv, write_csv, CSV_HEADER};
pub use gantt::{process_chain, render_slices, slices, GanttSlice};
pub use table::{render_event_log, render_results};
