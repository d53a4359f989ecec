//! REST API reference with request and response samples.

use super::{standard_document, CUSTOM_TITLE};
use crate::model::{Block, Color, Document, Metadata, Style, StyleSheet, INCH};

const INTRO: &str = r#"
    <b>Visão Geral:</b><br/>
    Esta documentação descreve os endpoints da API REST do nosso sistema de e-commerce.
    A API utiliza autenticação via JWT (JSON Web Tokens) e retorna dados no formato JSON.
    Base URL: https://api.exemplo.com/v2<br/><br/>

    <b>Autenticação:</b><br/>
    Todas as requisições (exceto /auth/login) devem incluir o header:<br/>
    Authorization: Bearer {seu_token_jwt}<br/><br/>

    <b>Rate Limiting:</b><br/>
    • 100 requisições por minuto para usuários autenticados<br/>
    • 20 requisições por minuto para requisições anônimas<br/>
    • Header 'X-RateLimit-Remaining' indica quantas requisições restam
"#;

const LIST_PRODUCTS: &str = r#"
    <b>GET /products</b><br/>
    Retorna lista paginada de produtos.<br/><br/>

    <b>Query Parameters:</b><br/>
    • page (int, opcional): Número da página (padrão: 1)<br/>
    • limit (int, opcional): Items por página (padrão: 20, máximo: 100)<br/>
    • category (string, opcional): Filtrar por categoria<br/>
    • min_price (float, opcional): Preço mínimo<br/>
    • max_price (float, opcional): Preço máximo<br/>
    • sort (string, opcional): Ordenação (price_asc, price_desc, name, newest)<br/><br/>

    <b>Exemplo de Requisição:</b>
"#;

const LIST_REQUEST: &str = "GET /products?category=eletronicos&min_price=1000&sort=price_asc&page=1&limit=10";

const LIST_RESPONSE: &str = r#"
{
  "data": [
    {
      "id": "prod_12345",
      "name": "Smartphone Galaxy S23 Ultra",
      "description": "Tela 6.8' Dynamic AMOLED, 256GB",
      "price": 5999.99,
      "category": "eletronicos",
      "stock": 45,
      "images": ["https://cdn.exemplo.com/img1.jpg"],
      "created_at": "2024-01-15T10:30:00Z"
    }
  ],
  "pagination": {
    "current_page": 1,
    "total_pages": 15,
    "total_items": 150,
    "per_page": 10
  }
}
"#;

const GET_PRODUCT: &str = r#"
    <b>GET /products/{product_id}</b><br/>
    Retorna detalhes de um produto específico.<br/><br/>

    <b>Path Parameters:</b><br/>
    • product_id (string, obrigatório): ID único do produto<br/><br/>

    <b>Resposta 200 OK:</b> Objeto completo do produto com reviews e especificações<br/>
    <b>Resposta 404 Not Found:</b> Produto não encontrado
"#;

const CREATE_ORDER: &str = r#"
    <b>POST /orders</b><br/>
    Cria um novo pedido.<br/><br/>

    <b>Request Body (JSON):</b>
"#;

const ORDER_BODY: &str = r#"
{
  "items": [
    {
      "product_id": "prod_12345",
      "quantity": 2,
      "price": 5999.99
    }
  ],
  "shipping_address": {
    "street": "Rua Exemplo, 123",
    "city": "São Paulo",
    "state": "SP",
    "zip_code": "01234-567"
  },
  "payment_method": "credit_card",
  "payment_details": {
    "card_token": "tok_xxxxxxxxxxxx"
  }
}
"#;

const ORDER_RESPONSE: &str = r#"
{
  "order_id": "ord_67890",
  "status": "processing",
  "total_amount": 11999.98,
  "estimated_delivery": "2024-02-20",
  "tracking_code": null,
  "created_at": "2024-02-15T14:22:00Z"
}
"#;

const ERRORS: &str = r#"
    <b>Códigos de Erro Comuns:</b><br/>
    • 400 Bad Request: Dados inválidos no body<br/>
    • 401 Unauthorized: Token ausente ou inválido<br/>
    • 403 Forbidden: Sem permissão para acessar recurso<br/>
    • 404 Not Found: Recurso não encontrado<br/>
    • 422 Unprocessable Entity: Validação falhou (ex: estoque insuficiente)<br/>
    • 429 Too Many Requests: Rate limit excedido<br/>
    • 500 Internal Server Error: Erro no servidor
"#;

pub(super) fn document() -> Document {
    let base = standard_document(Color::DARK_BLUE);
    let styles = base.styles.clone().with_style(
        StyleSheet::CODE,
        Style::new(9.0)
            .monospace()
            .with_left_indent(20.0)
            .with_space_after(10.0),
    );
    let mut doc = base.with_styles(styles).with_metadata(
        Metadata::titled("Documentação da API")
            .with_subject("E-commerce Platform REST API v2.0"),
    );

    doc.extend([
        Block::title("Documentação da API").with_style(CUSTOM_TITLE),
        Block::title("E-commerce Platform REST API v2.0").with_style(CUSTOM_TITLE),
        Block::spacer(0.5 * INCH),
        Block::paragraph(INTRO),
        Block::heading("Endpoints de Produtos", 2),
        Block::paragraph(LIST_PRODUCTS),
        Block::code(LIST_REQUEST),
        Block::paragraph("<b>Resposta 200 OK:</b>"),
        Block::code(LIST_RESPONSE),
        Block::spacer(0.2 * INCH),
        Block::paragraph(GET_PRODUCT),
        Block::page_break(),
        Block::heading("Endpoints de Pedidos", 2),
        Block::paragraph(CREATE_ORDER),
        Block::code(ORDER_BODY),
        Block::paragraph("<b>Resposta 201 Created:</b>"),
        Block::code(ORDER_RESPONSE),
        Block::paragraph(ERRORS),
    ]);
    doc
}
