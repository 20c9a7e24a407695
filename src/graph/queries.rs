//! GraphQL query documents for the Uniswap V2 subgraph.

/// Liquidity positions for a set of user addresses, paginated.
pub const LIQUIDITY_POSITIONS_QUERY: &str = r#"
query liquidityPositions(
    $limit: Int!
    $offset: Int!
    $addresses: [String!]
    $balance: BigDecimal!
) {
    liquidityPositions(
        first: $limit
        skip: $offset
        where: { user_in: $addresses, liquidityTokenBalance_gt: $balance }
    ) {
        id
        liquidityTokenBalance
        pair {
            id
            reserve0
            reserve1
            totalSupply
            token0 {
                id
                decimals
                name
                symbol
            }
            token1 {
                id
                decimals
                name
                symbol
            }
        }
        user {
            id
        }
    }
}
"#;

/// Daily aggregate USD prices for a set of tokens, paginated.
///
/// The subgraph writes one row per token per day at 00:00:00 UTC.
pub const TOKEN_DAY_DATAS_QUERY: &str = r#"
query tokenDayDatas(
    $limit: Int!
    $offset: Int!
    $tokenIds: [String!]
    $date: Int!
) {
    tokenDayDatas(
        first: $limit
        skip: $offset
        where: { token_in: $tokenIds, date: $date }
    ) {
        date
        token {
            id
        }
        priceUSD
    }
}
"#;
