use common::catalog::{self, CITIES, MODELS};
use common::{Form, ForecastType, ProphetHorizon, UiEvent, Weekday};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ForecastFormProps {
    pub form: Form,
    pub dispatch: Callback<UiEvent>,
}

fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

/// Forecast query form. Control values mirror the controller's form state;
/// every change is forwarded as a [`UiEvent`].
#[function_component(ForecastForm)]
pub fn forecast_form(props: &ForecastFormProps) -> Html {
    let state = props.form.state();
    let visibility = props.form.visibility();

    let on_city = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: Event| dispatch.emit(UiEvent::CityChanged(select_value(&e))))
    };

    let on_model = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: Event| dispatch.emit(UiEvent::ModelChanged(select_value(&e))))
    };

    let on_forecast_type = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: Event| match select_value(&e).parse::<ForecastType>() {
            Ok(forecast_type) => dispatch.emit(UiEvent::ForecastTypeChanged(forecast_type)),
            Err(err) => log::warn!("Ignoring forecast type change: {}", err),
        })
    };

    let on_day = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: Event| {
            let value = select_value(&e);
            let day = if value.is_empty() { None } else { value.parse::<Weekday>().ok() };
            dispatch.emit(UiEvent::DayOfWeekChanged(day));
        })
    };

    let on_extended = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: Event| {
            let value = select_value(&e);
            let horizon = if value.is_empty() { None } else { value.parse::<ProphetHorizon>().ok() };
            dispatch.emit(UiEvent::ProphetExtendedChanged(horizon));
        })
    };

    let on_bounds = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: Event| {
            let checked = e.target_unchecked_into::<HtmlInputElement>().checked();
            dispatch.emit(UiEvent::IncludeBoundsToggled(checked));
        })
    };

    let on_submit = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::debug!("Forecast form submitted");
            dispatch.emit(UiEvent::Submitted);
        })
    };

    let prophet_hidden = (!visibility.prophet_options).then_some("hidden");

    html! {
        <form id="forecast-form" onsubmit={on_submit} class="card bg-base-100 shadow">
            <div class="card-body grid grid-cols-1 md:grid-cols-2 gap-4">
                <div class="form-control">
                    <label class="label" for="city"><span class="label-text">{"City"}</span></label>
                    <select id="city" name="city" class="select select-bordered w-full" onchange={on_city}>
                        { for CITIES.iter().map(|city| html! {
                            <option value={*city} selected={state.city == *city}>{catalog::city_label(city)}</option>
                        })}
                    </select>
                </div>

                <div class="form-control">
                    <label class="label" for="model_name"><span class="label-text">{"Model"}</span></label>
                    <select id="model_name" name="model_name" class="select select-bordered w-full" onchange={on_model}>
                        { for MODELS.iter().map(|model| html! {
                            <option value={*model} selected={state.model_name == *model}>{*model}</option>
                        })}
                    </select>
                </div>

                <div class="form-control">
                    <label class="label" for="forecast_type"><span class="label-text">{"Forecast Type"}</span></label>
                    <select id="forecast_type" name="forecast_type" class="select select-bordered w-full" onchange={on_forecast_type}>
                        { for ForecastType::ALL.iter().map(|forecast_type| html! {
                            <option value={forecast_type.as_str()} selected={state.forecast_type == *forecast_type}>
                                {forecast_type.label()}
                            </option>
                        })}
                    </select>
                </div>

                <div id="day-of-week-group" class={classes!("form-control", (!visibility.day_of_week).then_some("hidden"))}>
                    <label class="label" for="day_of_week"><span class="label-text">{"Day of Week"}</span></label>
                    <select id="day_of_week" name="day_of_week" class="select select-bordered w-full" onchange={on_day}>
                        <option value="" selected={state.day_of_week.is_none()}>{"All days"}</option>
                        { for Weekday::ALL.iter().map(|day| html! {
                            <option value={day.index().to_string()} selected={state.day_of_week == Some(*day)}>
                                {day.label()}
                            </option>
                        })}
                    </select>
                </div>

                <div class={classes!("form-control", "prophet-options", prophet_hidden)}>
                    <label class="label" for="prophet_extended"><span class="label-text">{"Extended Forecast"}</span></label>
                    <select id="prophet_extended" name="prophet_extended" class="select select-bordered w-full" onchange={on_extended}>
                        <option value="" selected={state.prophet_extended.is_none()}>{"None"}</option>
                        { for ProphetHorizon::ALL.iter().map(|horizon| html! {
                            <option value={horizon.as_str()} selected={state.prophet_extended == Some(*horizon)}>
                                {horizon.label()}
                            </option>
                        })}
                    </select>
                </div>

                <div class={classes!("form-control", "prophet-options", prophet_hidden)}>
                    <label class="label cursor-pointer justify-start gap-3">
                        <input
                            type="checkbox"
                            id="include_bounds"
                            name="include_bounds"
                            class="checkbox"
                            checked={state.include_bounds}
                            onchange={on_bounds}
                        />
                        <span class="label-text">{"Include uncertainty bounds"}</span>
                    </label>
                </div>

                <div class="md:col-span-2 flex justify-end">
                    <button type="submit" class="btn btn-primary">{"Get Forecast"}</button>
                </div>
            </div>
        </form>
    }
}
