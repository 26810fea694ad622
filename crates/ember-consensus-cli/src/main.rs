use ember_consensus::{block_subsidy, cumulative_subsidy, money_range, Amount, ConsensusParams};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct Request {
    op: String,

    #[serde(default)]
    height: u64,

    #[serde(default)]
    amount: Amount,

    #[serde(default = "default_network")]
    network: String,
}

fn default_network() -> String {
    "main".to_string()
}

#[derive(Serialize)]
struct Response {
    ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    err: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    subsidy: Option<Amount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    in_range: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<Amount>,
}

fn main() {
    let req: Request = match serde_json::from_reader(std::io::stdin()) {
        Ok(v) => v,
        Err(e) => {
            let resp = Response {
                ok: false,
                err: Some(format!("bad request: {e}")),
                subsidy: None,
                in_range: None,
                total: None,
            };
            let _ = serde_json::to_writer(std::io::stdout(), &resp);
            return;
        }
    };

    let resp = match req.op.as_str() {
        "block_subsidy" => match ConsensusParams::from_network(&req.network) {
            Ok(params) => Response {
                ok: true,
                err: None,
                subsidy: Some(block_subsidy(req.height, &params)),
                in_range: None,
                total: None,
            },
            Err(e) => Response {
                ok: false,
                err: Some(e.code.as_str().to_string()),
                subsidy: None,
                in_range: None,
                total: None,
            },
        },
        "money_range" => Response {
            ok: true,
            err: None,
            subsidy: None,
            in_range: Some(money_range(req.amount)),
            total: None,
        },
        "cumulative_subsidy" => match ConsensusParams::from_network(&req.network) {
            Ok(params) => match cumulative_subsidy(req.height, &params) {
                Ok(total) => Response {
                    ok: true,
                    err: None,
                    subsidy: None,
                    in_range: None,
                    total: Some(total),
                },
                Err(e) => Response {
                    ok: false,
                    err: Some(e.code.as_str().to_string()),
                    subsidy: None,
                    in_range: None,
                    total: None,
                },
            },
            Err(e) => Response {
                ok: false,
                err: Some(e.code.as_str().to_string()),
                subsidy: None,
                in_range: None,
                total: None,
            },
        },
        _ => Response {
            ok: false,
            err: Some("unknown op".to_string()),
            subsidy: None,
            in_range: None,
            total: None,
        },
    };

    let _ = serde_json::to_writer(std::io::stdout(), &resp);
}
