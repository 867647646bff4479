use common::ForecastTable;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ForecastTableViewProps {
    pub table: ForecastTable,
}

/// Columns are the raw keys of the first row; cells are plain text.
#[function_component(ForecastTableView)]
pub fn forecast_table_view(props: &ForecastTableViewProps) -> Html {
    let table = &props.table;

    html! {
        <div class="overflow-x-auto bg-base-100 shadow rounded-box">
            <table class="table table-zebra table-sm">
                <thead>
                    <tr>
                        { for table.columns.iter().map(|column| html! { <th>{column}</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for table.rows.iter().map(|row| html! {
                        <tr class="hover">
                            { for row.iter().map(|cell| html! { <td class="whitespace-nowrap">{cell}</td> }) }
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
