use crate::models::calendar::{Calendar, Day, Month};
use crate::services::calendar::narrow;

use super::utils::escape_html;
use super::{RenderError, RenderOptions};

const STYLESHEET: &str = r#"
  body { margin: 0; font-family: system-ui, sans-serif; color: #020617; }
  .planner { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); }
  .month { grid-column: span 2; display: flex; align-items: center; justify-content: center;
           padding: 0.5rem; background: #020617; color: #f8fafc; }
  .month h3 { margin: 0; font-size: 4.5rem; font-weight: 700; }
  .day { height: fit-content; border: 1px solid #020617; border-collapse: collapse;
         opacity: 0; animation: reveal 0.3s ease-out forwards;
         animation-delay: calc(var(--reveal) * 8ms); }
  .day .row { display: flex; border-bottom: 1px solid #020617; max-width: 100%; }
  .day label { display: inline-flex; flex-direction: column; padding-left: 0.5rem; }
  .day label small { font-size: 8px; text-transform: uppercase; }
  .day input { border: none; outline: none; }
  .day .weekday { background: #020617; color: #f8fafc; height: 2.25rem; width: 100%;
                  max-width: 2.75rem; text-align: center; font-size: 1.5rem;
                  text-transform: uppercase; }
  .day .date { font-family: ui-monospace, monospace; font-variant-numeric: tabular-nums;
               font-weight: 700; font-size: 6rem; text-align: center; }
  @keyframes reveal { to { opacity: 1; } }
  @media print { .day { opacity: 1; animation: none; } }
"#;

pub(super) fn render(calendar: &Calendar, options: &RenderOptions) -> Result<String, RenderError> {
    let title = escape_html(&options.title_for(calendar));
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str(&format!("<style>{STYLESHEET}</style>\n"));
    html.push_str("</head>\n<body>\n<div class=\"planner\">\n");

    let mut reveal = 0usize;
    for month in &calendar.months {
        append_month_header(&mut html, month);
        for day in &month.days {
            append_day_cell(&mut html, calendar.year, month, day, reveal, options)?;
            reveal += 1;
        }
    }

    html.push_str("</div>\n</body>\n</html>\n");
    Ok(html)
}

fn append_month_header(buffer: &mut String, month: &Month) {
    buffer.push_str(&format!(
        "<div class=\"month\"><h3>{}</h3></div>\n",
        escape_html(&month.name)
    ));
}

fn append_day_cell(
    buffer: &mut String,
    year: i32,
    month: &Month,
    day: &Day,
    reveal: usize,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    let label = narrow(&day.name.short)?;
    let key = format!("{}{}{}{}", year, month.name, day.name.short, day.date);
    let [first, second] = &options.annotation_labels;

    buffer.push_str(&format!(
        "<div class=\"day\" data-key=\"{}\" data-reveal=\"{reveal}\" style=\"--reveal: {reveal}\" title=\"{}\">\n",
        escape_html(&key),
        escape_html(&day.name.long),
    ));
    buffer.push_str(&format!(
        "  <div class=\"row\"><label><small>{}</small><input></label><div class=\"weekday\">{label}</div></div>\n",
        escape_html(first)
    ));
    buffer.push_str(&format!(
        "  <div class=\"row\"><label><small>{}</small><input></label></div>\n",
        escape_html(second)
    ));
    buffer.push_str(&format!(
        "  <div class=\"date\">{}<small>.</small></div>\n",
        day.date
    ));
    buffer.push_str("</div>\n");
    Ok(())
}
