//! The ECharts configuration for the reports page.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::Bar,
};
use maud::{Markup, PreEscaped, html};

use crate::{html::HeadElement, report::MonthlySummary};

/// The HTML element ID of the chart container.
const CHART_ID: &str = "income-expenses-chart";

/// A bar chart of income against expenses per month, oldest month on the left.
pub(super) fn income_expenses_chart(monthly_summary: &[MonthlySummary]) -> Chart {
    let chronological = monthly_summary.iter().rev();
    let labels: Vec<String> = chronological.clone().map(MonthlySummary::label).collect();
    let income: Vec<f64> = chronological.clone().map(|month| month.income).collect();
    let expenses: Vec<f64> = chronological.map(|month| month.expenses).collect();

    Chart::new()
        .title(Title::new().text("Income vs Expenses").subtext("Per month"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .value_formatter(currency_formatter())
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .legend(Legend::new().right("4%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Bar::new().name("Income").data(income))
        .series(Bar::new().name("Expenses").data(expenses))
}

pub(super) fn chart_container() -> Markup {
    html! {
        div id=(CHART_ID) class="min-h-[380px] w-full rounded dark:bg-gray-100" {}
    }
}

/// The script that draws `chart` into the chart container once the page loads.
pub(super) fn chart_script(chart: &Chart) -> HeadElement {
    let script = format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
            const chart = echarts.init(document.getElementById("{CHART_ID}"));
            chart.setOption({chart});
            window.addEventListener('resize', chart.resize);
        }});"#
    );

    HeadElement::ScriptSource(PreEscaped(script))
}

fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}
