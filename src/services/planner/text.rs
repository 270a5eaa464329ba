use crate::models::calendar::Calendar;
use crate::services::calendar::narrow;

use super::{RenderError, RenderOptions};

const ANNOTATION_WIDTH: usize = 24;

pub(super) fn render(calendar: &Calendar, options: &RenderOptions) -> Result<String, RenderError> {
    let mut text = String::new();
    let title = options.title_for(calendar);
    text.push_str(&format!("{title}\n{}\n", "=".repeat(title.chars().count())));

    let [first, second] = &options.annotation_labels;
    let blank = "_".repeat(ANNOTATION_WIDTH);

    for month in &calendar.months {
        text.push_str(&format!(
            "\n{}\n{}\n",
            month.name,
            "-".repeat(month.name.chars().count())
        ));
        for day in &month.days {
            let label = narrow(&day.name.short)?;
            text.push_str(&format!(
                "{:>2} {}  {:<10} {first}: {blank}  {second}: {blank}\n",
                day.date, label, day.name.long
            ));
        }
    }

    Ok(text)
}
