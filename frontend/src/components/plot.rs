use charming::{
  component::{Axis, Grid},
  element::{AreaStyle, AxisType, Color, LineStyle, SplitLine, Tooltip, Trigger},
  series::Line,
  Chart, WasmRenderer,
};
use chrono::Utc;
use dioxus::{logger::tracing::{error, warn}, prelude::*};

use crate::utils::{chart::{plotted_points, realistic_series}, traders::TraderRecord};

static CANVAS_ID_PROFIT: &str = "profit-chart";

const LOAD_ECHARTS_JS: &str = r#"
  function loadScript(src, callback) {
    const scriptElem = document.createElement('script');
    scriptElem.src = src;
    scriptElem.async = true;
    scriptElem.onload = callback;
    scriptElem.onerror = function() {
      console.error(`Error loading script: ${src}`);
    };
    document.head.appendChild(scriptElem);
  }

  if (window.echarts) {
    dioxus.send(true);
  } else {
    loadScript('https://cdn.jsdelivr.net/npm/echarts@5.6.0/dist/echarts.min.js', function() {
      dioxus.send(true);
    });
  }
"#;

// re-renders replace the single resize handler instead of stacking new ones
const RESIZE_JS: &str = r#"
  if (window.__pipsResize) {
    window.removeEventListener('resize', window.__pipsResize);
  }
  window.__pipsResize = function() {
    const element = document.getElementById('profit-chart');
    const chart = element && window.echarts ? echarts.getInstanceByDom(element) : null;
    if (chart) { chart.resize(); }
  };
  window.addEventListener('resize', window.__pipsResize);
"#;

const REMOVE_RESIZE_JS: &str = r#"
  if (window.__pipsResize) {
    window.removeEventListener('resize', window.__pipsResize);
    window.__pipsResize = null;
  }
"#;

/// Cumulative profit over the current year, one point per active month.
#[component]
pub fn ProfitChart(trader: ReadOnlySignal<TraderRecord>) -> Element {
  let renderer = use_signal(|| WasmRenderer::new_opt(None, None));
  let mut echarts_ready = use_signal(|| false);

  use_future(move || async move {
    let mut loader = document::eval(LOAD_ECHARTS_JS);
    match loader.recv::<bool>().await {
      Ok(_) => echarts_ready.set(true),
      Err(e) => warn!("echarts did not load: {:?}", e),
    }
  });

  use_drop(|| {
    document::eval(REMOVE_RESIZE_JS);
  });

  use_effect(move || {
    if !echarts_ready() {
      return;
    }
    let series = {
      let trader = trader.read();
      if trader.chart.is_empty() { realistic_series(&trader, Utc::now()) } else { trader.chart.clone() }
    };
    let (months, profits) = plotted_points(&series);

    let chart = Chart::new()
      .background_color("transparent")
      .color(vec![Color::Value("#22c55e".to_string())])
      .tooltip(Tooltip::new().trigger(Trigger::Axis))
      .grid(Grid::new().left("3%").right("4%").bottom("3%").contain_label(true))
      .x_axis(
        Axis::new()
          .type_(AxisType::Category)
          .data(months)
      )
      .y_axis(
        Axis::new()
          .type_(AxisType::Value)
          .split_line(SplitLine::new().line_style(LineStyle::new().color("rgba(148, 163, 184, 0.15)")))
      )
      .series(
        Line::new()
          .name("Cumulative Profit")
          .smooth(true)
          .area_style(AreaStyle::new().opacity(0.15))
          .data(profits)
      );

    if let Err(e) = renderer.read_unchecked().render(CANVAS_ID_PROFIT, &chart) {
      error!("failed to render profit chart: {:?}", e);
      return;
    }
    document::eval(RESIZE_JS);
  });

  rsx! {
    div {
      class: "chart-card",
      h3 { "Profit Over Time" }
      div {
        id: CANVAS_ID_PROFIT,
        class: "chart-canvas",
        if !echarts_ready() {
          div { class: "skeleton-bar chart-skeleton" }
        }
      }
    }
  }
}
