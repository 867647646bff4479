use common::metrics::METRICS_TABLE_HEADERS;
use common::MetricsTable;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MetricsTableViewProps {
    pub table: MetricsTable,
}

#[function_component(MetricsTableView)]
pub fn metrics_table_view(props: &MetricsTableViewProps) -> Html {
    html! {
        <table class="table table-sm metrics-table" data-scope={props.table.scope.clone()}>
            <thead>
                <tr>
                    { for METRICS_TABLE_HEADERS.iter().map(|header| html! { <th>{*header}</th> }) }
                </tr>
            </thead>
            <tbody>
                { for props.table.rows.iter().map(|row| html! {
                    <tr>
                        <td>{&row.label}</td>
                        <td class="font-mono">{&row.value}</td>
                        <td class={classes!(row.css_class())}>{row.interpretation_text()}</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}
