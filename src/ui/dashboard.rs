//! Static control panel served at `/dashboard`

const DASHBOARD_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>XAU/USD Signal Dashboard</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 20px; background: #0f172a; color: #e2e8f0; }
    .row { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin-bottom: 12px; }
    .card { background: #111827; border: 1px solid #334155; border-radius: 10px; padding: 12px; }
    h1, h2 { margin: 0 0 8px; }
    label { display:block; margin-top:6px; font-size:12px; color:#94a3b8; }
    input, textarea, select { width:100%; background:#0b1220; color:#e2e8f0; border:1px solid #334155; border-radius:6px; padding:8px; }
    button { background:#2563eb; color:white; border:0; border-radius:6px; padding:8px 12px; cursor:pointer; margin-right:6px; margin-top:8px; }
    pre { white-space: pre-wrap; background:#020617; border:1px solid #334155; border-radius:6px; padding:8px; }
    .muted { color:#94a3b8; font-size:12px; }
  </style>
</head>
<body>
  <h1>XAU/USD Signal Panel</h1>
  <p class="muted">Live price, signal generation, online trainer and TradingView feed.</p>
  <div class="row">
    <div class="card"><h2>Market</h2>
      <button onclick="getPrice()">Get XAUUSD price</button>
      <button onclick="getIndicators()">Indicators</button>
      <pre id="priceOut">-</pre></div>
    <div class="card"><h2>Online training</h2>
      <button onclick="trainingStart()">Start</button><button onclick="trainingStatus()">Status</button><button onclick="trainingStop()">Stop</button>
      <pre id="trainOut">-</pre></div>
  </div>
  <div class="row">
    <div class="card"><h2>Generate signal</h2>
      <label>Price</label><input id="price" value="2300" />
      <label>ATR</label><input id="atr" value="12" />
      <label>Pattern quality</label><input id="pq" value="0.8" />
      <label>Regime</label><select id="regime"><option>trend</option><option>range</option><option>shock</option><option>stable</option></select>
      <label>D1 probs [buy,sell,neutral]</label><input id="d1" value="0.55,0.2,0.25" />
      <label>Votes JSON</label>
      <textarea id="votes" rows="6">[{"timeframe":"1H","probs":[0.7,0.15,0.15],"confidence":0.8,"weight":1.0},{"timeframe":"4H","probs":[0.66,0.18,0.16],"confidence":0.8,"weight":1.0}]</textarea>
      <button onclick="getSignal()">Compute signal</button>
      <pre id="signalOut">-</pre></div>
    <div class="card"><h2>TradingView analysis</h2>
      <label>Payload JSON</label>
      <textarea id="tvPayload" rows="8">{"symbol":"XAUUSD","timeframe":"1H","pattern":"triangle","note":"user setup","rsi":58.2,"fundamental_bias":0.3,"chart_image_url":"https://example.com/chart.png"}</textarea>
      <button onclick="sendTV()">Send analysis</button><button onclick="latestTV()">Show latest</button>
      <pre id="tvOut">-</pre></div>
  </div>
<script>
const api = ""; const j = (x) => JSON.stringify(x, null, 2);
async function show(id, r){ document.getElementById(id).textContent = j(await r.json()); }
async function getPrice(){ show('priceOut', await fetch(api + '/market/xauusd/price')); }
async function getIndicators(){ show('priceOut', await fetch(api + '/realtime/indicators')); }
async function trainingStart(){ show('trainOut', await fetch(api + '/training/start', {method:'POST'})); }
async function trainingStatus(){ show('trainOut', await fetch(api + '/training/status')); }
async function trainingStop(){ show('trainOut', await fetch(api + '/training/stop', {method:'POST'})); }
async function getSignal(){
  const payload = {
    price: Number(document.getElementById('price').value),
    atr: Number(document.getElementById('atr').value),
    pattern_quality: Number(document.getElementById('pq').value),
    regime: document.getElementById('regime').value,
    d1_probs: document.getElementById('d1').value.split(',').map(Number),
    votes: JSON.parse(document.getElementById('votes').value),
    chaikin_ok: true,
    fundamentals: { usd_index: 100, real_yield_10y: 1.0, fed_rate: 4.5, risk_aversion_score: 0.2 }
  };
  show('signalOut', await fetch(api + '/signal/xauusd', { method:'POST', headers:{'Content-Type':'application/json'}, body:JSON.stringify(payload)}));
}
async function sendTV(){ const payload = JSON.parse(document.getElementById('tvPayload').value); show('tvOut', await fetch(api + '/tradingview/analysis', { method:'POST', headers:{'Content-Type':'application/json'}, body:JSON.stringify(payload)})); }
async function latestTV(){ show('tvOut', await fetch(api + '/tradingview/analysis/latest?n=20')); }
</script>
</body>
</html>
"#;

pub fn dashboard_html() -> &'static str {
    DASHBOARD_HTML
}
